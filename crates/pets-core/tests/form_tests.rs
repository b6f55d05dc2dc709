// Integration tests for the pet form rules

use pets_core::{FormTarget, Gender, PetForm, PetRecord, PetsError};

fn form(name: &str, breed: &str, weight: &str, gender: Gender) -> PetForm {
    PetForm {
        name: name.to_string(),
        breed: breed.to_string(),
        weight: weight.to_string(),
        gender,
    }
}

#[test]
fn test_blank_new_form_is_noop() {
    let blank = form("  ", "", " ", Gender::Unknown);
    assert!(blank.is_blank());
    assert_eq!(blank.submit(FormTarget::New).unwrap(), None);
}

#[test]
fn test_gender_alone_makes_form_non_blank() {
    let only_gender = form("", "", "", Gender::Female);
    let pet = only_gender.submit(FormTarget::New).unwrap().unwrap();
    assert_eq!(pet.gender(), Gender::Female);
    assert_eq!(pet.name(), "");
    assert_eq!(pet.breed(), None);
    assert_eq!(pet.weight(), 0);
}

#[test]
fn test_new_form_trims_and_builds_unsaved_record() {
    let pet = form(" Toto ", " Terrier ", " 7 ", Gender::Male)
        .submit(FormTarget::New)
        .unwrap()
        .unwrap();

    assert_eq!(
        pet,
        PetRecord::new("Toto", Some("Terrier".to_string()), Gender::Male, 7)
    );
    assert_eq!(pet.id(), None);
}

#[test]
fn test_blank_edit_form_still_produces_record() {
    // Clearing every field of an existing pet is an edit, not a no-op
    let pet = form("", "", "", Gender::Unknown)
        .submit(FormTarget::Existing(12))
        .unwrap()
        .unwrap();

    assert_eq!(pet.id(), Some(12));
    assert_eq!(pet.weight(), 0);
}

#[test]
fn test_non_numeric_weight_rejected() {
    let err = form("Rex", "", "heavy", Gender::Male)
        .submit(FormTarget::New)
        .unwrap_err();

    assert_eq!(
        err,
        PetsError::InvalidWeight {
            input: "heavy".to_string()
        }
    );
}

#[test]
fn test_prefill_from_record_round_trips() {
    let stored = PetRecord::with_id(5, "Binx", None, Gender::Female, 3);
    let prefilled = PetForm::from_record(&stored);

    assert_eq!(prefilled.breed, "");
    assert_eq!(prefilled.weight, "3");

    let resubmitted = prefilled.submit(FormTarget::Existing(5)).unwrap().unwrap();
    assert_eq!(resubmitted, stored);
}
