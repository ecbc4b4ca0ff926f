#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::Local;
use common::{date, owner_named};
use mockall::mock;
use mockall::predicate::eq;
use petclinic_core::resolution::register_pet;
use petclinic_core::services::{OwnerMapService, PetMapService, VisitMapService};
use petclinic_core::workflows::visit::CREATE_OR_UPDATE_VISIT_FORM;
use petclinic_core::workflows::{
    load_pet_with_visit, load_pet_with_visit_on, process_new_visit_form, FieldErrors,
    NewVisitOutcome,
};
use petclinic_core::{CrudService, Pet, Result};

mock! {
    Pets {}

    impl CrudService<Pet> for Pets {
        fn find_all(&self) -> Result<Vec<Pet>>;
        fn find_by_id(&self, id: u64) -> Result<Option<Pet>>;
        fn save(&self, entity: Pet) -> Result<Pet>;
        fn delete_by_id(&self, id: u64) -> Result<()>;
    }
}

struct Fixture {
    owners: OwnerMapService,
    pets: PetMapService,
    visits: VisitMapService,
}

fn fixture() -> Fixture {
    let fixture = Fixture {
        owners: OwnerMapService::new(),
        pets: PetMapService::new(),
        visits: VisitMapService::new(),
    };
    fixture.owners.save(owner_named("Weston")).unwrap();
    register_pet(&fixture.owners, &fixture.pets, 1, Pet::new("Rosco")).unwrap();
    fixture
}

#[test]
fn test_load_binds_fresh_visit_to_pet() {
    let f = fixture();

    let before = Local::now().date_naive();
    let form = load_pet_with_visit(&f.pets, &f.owners, 1).unwrap().unwrap();
    let after = Local::now().date_naive();

    assert!(form.visit.id.is_none());
    assert_eq!(form.visit.pet_id, Some(1));
    assert!(before <= form.visit.date && form.visit.date <= after);
    assert_eq!(form.pet.name, "Rosco");
    assert_eq!(form.owner.unwrap().last_name, "Weston");
    assert!(f.visits.find_all().unwrap().is_empty());
}

#[test]
fn test_load_on_date_uses_that_date() {
    let f = fixture();

    let form = load_pet_with_visit_on(&f.pets, &f.owners, 1, date(2023, 12, 31))
        .unwrap()
        .unwrap();

    assert_eq!(form.visit.date, date(2023, 12, 31));
    assert_eq!(form.visit.pet_id, Some(1));
}

#[test]
fn test_visit_binds_to_identity_of_returned_pet() {
    let mut pets = MockPets::new();
    pets.expect_find_by_id()
        .with(eq(12))
        .times(1)
        .returning(|_| Ok(Some(Pet::with_id(3))));
    let owners = OwnerMapService::new();

    let form = load_pet_with_visit(&pets, &owners, 12).unwrap().unwrap();

    assert_eq!(form.pet.id, Some(3));
    assert_eq!(form.visit.pet_id, Some(3));
    assert!(form.owner.is_none());
}

#[test]
fn test_visit_falls_back_to_requested_identity() {
    let mut pets = MockPets::new();
    pets.expect_find_by_id()
        .with(eq(12))
        .returning(|_| Ok(Some(Pet::new("Nameless"))));
    let owners = OwnerMapService::new();

    let form = load_pet_with_visit_on(&pets, &owners, 12, date(2024, 3, 1))
        .unwrap()
        .unwrap();

    assert_eq!(form.visit.pet_id, Some(12));
}

#[test]
fn test_load_missing_pet_is_absent() {
    let f = fixture();

    assert!(load_pet_with_visit(&f.pets, &f.owners, 42).unwrap().is_none());
}

#[test]
fn test_valid_visit_redirects_to_owner() {
    let f = fixture();
    let mut form = load_pet_with_visit_on(&f.pets, &f.owners, 1, date(2024, 3, 1))
        .unwrap()
        .unwrap();
    form.visit.description = "Annual checkup".to_string();

    let outcome = process_new_visit_form(&f.visits, &f.pets, form, &FieldErrors::new()).unwrap();

    assert_eq!(outcome.view_name(), "redirect:/owners/1");
    let NewVisitOutcome::Redirect { owner_id, visit } = outcome else {
        panic!("Expected Redirect");
    };
    assert_eq!(owner_id, Some(1));
    assert_eq!(visit.id, Some(1));
    assert_eq!(f.pets.find_by_id(1).unwrap().unwrap().visit_ids, vec![1]);
    assert_eq!(
        f.visits.find_by_id(1).unwrap().unwrap().description,
        "Annual checkup"
    );
}

#[test]
fn test_invalid_visit_reprompts_without_saving() {
    let f = fixture();
    let form = load_pet_with_visit(&f.pets, &f.owners, 1).unwrap().unwrap();
    let mut errors = FieldErrors::new();
    errors.reject("description", "required");

    let outcome = process_new_visit_form(&f.visits, &f.pets, form, &errors).unwrap();

    assert_eq!(outcome, NewVisitOutcome::Reprompt);
    assert_eq!(outcome.view_name(), CREATE_OR_UPDATE_VISIT_FORM);
    assert_eq!(outcome.view_name(), "pets/createOrUpdateVisitForm");
    assert!(f.visits.find_all().unwrap().is_empty());
}
