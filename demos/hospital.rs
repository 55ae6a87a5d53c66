//! Hospital Routing
//!
//! This example routes patients to the doctor named on their referral.
//!
//! Key concepts:
//! - A transforming chain started from an implicit default
//! - Pattern guards built with the `guard!` macro
//! - Treating an unhandled patient as a domain outcome, not a chain error
//!
//! Run with: cargo run --example hospital

use responsibility::{guard, Guard, TransformChain};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Doctor {
    Surgeon,
    Nurse,
    AnotherDoctor,
    Therapist,
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Surgeon => "SURGEON",
            Self::Nurse => "NURSE",
            Self::AnotherDoctor => "ANOTHER_DOCTOR",
            Self::Therapist => "THERAPIST",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
struct Patient {
    name: String,
    direction: Option<Doctor>,
}

#[derive(Debug, Error)]
enum VisitError {
    #[error("Patient '{0}' has no referral to any doctor")]
    NoReferral(String),
}

// Pure guard - holds for patients referred to `doctor`
fn direct_to(doctor: Doctor) -> Guard<Patient> {
    guard!(Patient { direction: Some(referred), .. } if *referred == doctor)
}

fn conclusion(doctor: Doctor, finding: &'static str) -> impl Fn(&Patient) -> String + Send + Sync {
    move |patient: &Patient| format!("{doctor} - {finding} ({})", patient.name)
}

fn hospital() -> TransformChain<Patient, Option<String>> {
    TransformChain::start_from(conclusion(Doctor::Therapist, "person is healthy"))
        .guard(direct_to(Doctor::Therapist))
        .chain_some(conclusion(Doctor::AnotherDoctor, "(zzzZ)"))
        .guard(direct_to(Doctor::AnotherDoctor))
        .chain_some(conclusion(Doctor::Nurse, "procedure room is busy"))
        .guard(direct_to(Doctor::Nurse))
        .chain_some(conclusion(Doctor::Surgeon, "x-ray is required"))
        .guard(direct_to(Doctor::Surgeon))
}

fn visit(
    hospital: &TransformChain<Patient, Option<String>>,
    patient: &Patient,
) -> Result<String, VisitError> {
    hospital
        .apply(patient)
        .ok_or_else(|| VisitError::NoReferral(patient.name.clone()))
}

fn main() {
    println!("=== Hospital Routing Example ===\n");

    let hospital = hospital();
    println!("Hospital chain built with {} doctors\n", hospital.len());

    let patients = [
        Patient {
            name: "Alice".to_string(),
            direction: Some(Doctor::Therapist),
        },
        Patient {
            name: "Bob".to_string(),
            direction: Some(Doctor::Surgeon),
        },
        Patient {
            name: "Carol".to_string(),
            direction: Some(Doctor::Nurse),
        },
        Patient {
            name: "Dave".to_string(),
            direction: None,
        },
    ];

    for patient in &patients {
        match visit(&hospital, patient) {
            Ok(result) => println!("  Hospital visit result : {result}"),
            Err(e) => println!("  Hospital visit failed : {e}"),
        }
    }

    println!("\nKey Takeaways:");
    println!("- Guards compare a record field with an expected value");
    println!("- An unreferred patient falls through to the implicit default");
    println!("- The caller decides what an unhandled input means");

    println!("\n=== Example Complete ===");
}
