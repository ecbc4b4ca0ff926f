use chrono::NaiveDate;
use petclinic_core::services::OwnerMapService;
use petclinic_core::{CrudService, Owner};

/// Fixed calendar date for test data
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Owner service holding the given last names, saved in order (ids 1..)
#[allow(dead_code)]
pub fn owner_service_with(last_names: &[&str]) -> OwnerMapService {
    let service = OwnerMapService::new();
    for last_name in last_names {
        service.save(Owner::new("Test", *last_name)).unwrap();
    }
    service
}

/// Unsaved owner with the given last name
#[allow(dead_code)]
pub fn owner_named(last_name: &str) -> Owner {
    Owner::new("Test", last_name)
}

/// Small but complete seed fixture
#[allow(dead_code)]
pub const CLINIC_SEED: &str = r#"
schema_version: 0
pet_types: [Dog, Cat]
specialities: [radiology, surgery, dentistry]
vets:
  - first_name: James
    last_name: Carter
  - first_name: Helen
    last_name: Leary
    specialities: [radiology]
  - first_name: Linda
    last_name: Douglas
    specialities: [surgery, dentistry]
owners:
  - first_name: Michael
    last_name: Weston
    address: 123 Sweet Street
    city: Miami
    telephone: "1231231234"
    pets:
      - name: Rosco
        pet_type: Dog
        birth_date: 2019-03-14
        visits:
          - date: 2024-01-10
            description: Sneezy Kitty
  - first_name: Fiona
    last_name: Glenanne
    address: 123 Brickerel
    city: Miami
    telephone: "1231231234"
    pets:
      - name: Just Cat
        pet_type: Cat
  - first_name: Sam
    last_name: Axe
"#;
