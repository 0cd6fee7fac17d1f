//! Fixture data loaded into the store at startup.
//!
//! Every call builds fresh values, so each `AppState` gets its own copy.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::{Uuid, uuid};

use promocode_domain::administration::{Employee, Role};
use promocode_domain::promo_code_management::{
    Customer, CustomerPreference, Preference, PromoCode,
};

pub const ADMIN_ROLE_ID: Uuid = uuid!("53729686-a368-4eeb-8bfa-cc69b6050d02");
pub const PARTNER_MANAGER_ROLE_ID: Uuid = uuid!("b0ae7aac-5493-45cd-ad16-87426a5e7665");

pub const OWNER_EMPLOYEE_ID: Uuid = uuid!("451533d5-d8d5-4a11-9c7b-eb9f14e1a32f");
pub const PARTNER_MANAGER_EMPLOYEE_ID: Uuid = uuid!("f766e2bf-340a-46ea-bff3-f1700b435895");

pub const THEATRE_PREFERENCE_ID: Uuid = uuid!("ef7f299f-92d7-459f-896e-078ed53ef99c");
pub const FAMILY_PREFERENCE_ID: Uuid = uuid!("c4bda62e-fc74-4256-a956-4760b3858cbd");
pub const KIDS_PREFERENCE_ID: Uuid = uuid!("76324c47-68d2-472d-abb8-33cfa8cc0c84");

pub const CUSTOMER_ID: Uuid = uuid!("a6c8c6b1-4349-45b0-ab31-244740aaf0f0");

pub const TOYS_PROMO_CODE_ID: Uuid = uuid!("2f0c4a8e-8a3b-4d51-9d7e-3c1b5f6a7e01");
pub const CATS_PROMO_CODE_ID: Uuid = uuid!("2f0c4a8e-8a3b-4d51-9d7e-3c1b5f6a7e02");

const FAMILY_LINK_ID: Uuid = uuid!("9b1f6f3e-1c2d-4e5f-8a7b-0c1d2e3f4a01");
const THEATRE_LINK_ID: Uuid = uuid!("9b1f6f3e-1c2d-4e5f-8a7b-0c1d2e3f4a02");

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID,
            name: "Admin".into(),
            description: "Administrator".into(),
        },
        Role {
            id: PARTNER_MANAGER_ROLE_ID,
            name: "PartnerManager".into(),
            description: "Partner manager".into(),
        },
    ]
}

fn role_named(name: &str) -> Role {
    roles()
        .into_iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| Role {
            id: Uuid::nil(),
            name: name.to_owned(),
            description: String::new(),
        })
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: OWNER_EMPLOYEE_ID,
            first_name: "Ivan".into(),
            last_name: "Sergeev".into(),
            email: "owner@somemail.ru".into(),
            role: role_named("Admin"),
            applied_promocodes_count: 5,
        },
        Employee {
            id: PARTNER_MANAGER_EMPLOYEE_ID,
            first_name: "Petr".into(),
            last_name: "Andreev".into(),
            email: "andreev@somemail.ru".into(),
            role: role_named("PartnerManager"),
            applied_promocodes_count: 10,
        },
    ]
}

pub fn preferences() -> Vec<Preference> {
    vec![
        Preference {
            id: THEATRE_PREFERENCE_ID,
            name: "Theatre".into(),
        },
        Preference {
            id: FAMILY_PREFERENCE_ID,
            name: "Family".into(),
        },
        Preference {
            id: KIDS_PREFERENCE_ID,
            name: "Kids".into(),
        },
    ]
}

pub fn customer_preferences() -> Vec<CustomerPreference> {
    vec![
        CustomerPreference {
            id: FAMILY_LINK_ID,
            customer_id: CUSTOMER_ID,
            preference_id: FAMILY_PREFERENCE_ID,
            preference: None,
        },
        CustomerPreference {
            id: THEATRE_LINK_ID,
            customer_id: CUSTOMER_ID,
            preference_id: THEATRE_PREFERENCE_ID,
            preference: None,
        },
    ]
}

pub fn promo_codes() -> Vec<PromoCode> {
    vec![
        PromoCode {
            id: TOYS_PROMO_CODE_ID,
            code: "ALLFOR100".into(),
            service_info: String::new(),
            begin_date: midnight(2020, 7, 9),
            end_date: midnight(2020, 8, 9),
            partner_name: "Supertoys".into(),
            customer_id: Some(CUSTOMER_ID),
            employee_id: PARTNER_MANAGER_EMPLOYEE_ID,
            preference_id: FAMILY_PREFERENCE_ID,
        },
        PromoCode {
            id: CATS_PROMO_CODE_ID,
            code: "PROMO 200".into(),
            service_info: String::new(),
            begin_date: midnight(2020, 8, 9),
            end_date: midnight(2020, 9, 9),
            partner_name: "A cat for everyone".into(),
            customer_id: Some(CUSTOMER_ID),
            employee_id: OWNER_EMPLOYEE_ID,
            preference_id: FAMILY_PREFERENCE_ID,
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![Customer {
        id: CUSTOMER_ID,
        first_name: "Ivan".into(),
        last_name: "Petrov".into(),
        email: "ivan_sergeev@mail.ru".into(),
        preferences: customer_preferences(),
        promo_codes: promo_codes(),
    }]
}
