//! Hours balance against a prorated annual contract target.

use jornada_hours::round2;
use serde::Serialize;

use crate::config::AnnualContractHours;

/// Hours beyond which a balance is no longer ordinary.
const SEVERE_HOURS: f64 = 100.0;

/// Debt below this many hours is treated as noise.
const MINOR_HOURS: f64 = 1.0;

/// Who owes hours to whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceType {
    /// Worked more than the target.
    CompanyOwes,
    /// Worked less than the target.
    EmployeeOwes,
    /// Exactly on target (to 2 decimals).
    Balanced,
}

/// How the balance should be flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Employee owes more than 100 hours.
    Critico,
    /// Employee owes between 1 and 100 hours.
    Advertencia,
    /// Balanced, a small debt, or the company owes up to 100 hours.
    Ok,
    /// Company owes more than 100 hours.
    Excelente,
}

/// Worked hours compared with the prorated contract target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursBalance {
    /// Hours worked, including extra shifts.
    pub worked_hours: f64,
    /// Annual target before proration.
    pub contract_hours: f64,
    /// Target scaled by `effective_days / total_days`.
    pub prorated_target: f64,
    /// `worked_hours - prorated_target`.
    pub saldo: f64,
    /// Direction of the balance.
    pub balance_type: BalanceType,
    /// Flag for presentation.
    pub severity: Severity,
    /// `|saldo| / hours_per_day`.
    pub equivalent_days: f64,
    /// Human-readable summary.
    pub message: String,
}

fn classify(saldo: f64) -> (BalanceType, Severity) {
    if saldo > 0.0 {
        let severity = if saldo > SEVERE_HOURS {
            Severity::Excelente
        } else {
            Severity::Ok
        };
        (BalanceType::CompanyOwes, severity)
    } else if saldo < 0.0 {
        let owed = -saldo;
        let severity = if owed > SEVERE_HOURS {
            Severity::Critico
        } else if owed >= MINOR_HOURS {
            Severity::Advertencia
        } else {
            Severity::Ok
        };
        (BalanceType::EmployeeOwes, severity)
    } else {
        (BalanceType::Balanced, Severity::Ok)
    }
}

fn message(balance_type: BalanceType, saldo: f64, equivalent_days: f64) -> String {
    match balance_type {
        BalanceType::CompanyOwes => format!(
            "La empresa te debe {:.2} horas ({:.2} días)",
            saldo, equivalent_days
        ),
        BalanceType::EmployeeOwes => format!(
            "Debes {:.2} horas a la empresa ({:.2} días)",
            -saldo, equivalent_days
        ),
        BalanceType::Balanced => "Horas trabajadas iguales a las del contrato".to_string(),
    }
}

/// Computes the balance of `worked_hours` against a contract target.
///
/// The target is prorated by `effective_days / total_days` so a mid-year
/// start is measured against the part of the year actually under contract.
/// `total_days` must be non-zero and `hours_per_day` positive; callers
/// validate both.
pub fn compute_balance(
    worked_hours: f64,
    contract: AnnualContractHours,
    effective_days: usize,
    total_days: usize,
    hours_per_day: f64,
) -> HoursBalance {
    let prorated = round2(contract.get() * effective_days as f64 / total_days as f64);
    let worked = round2(worked_hours);
    let saldo = round2(worked - prorated);
    let (balance_type, severity) = classify(saldo);
    let equivalent_days = round2(saldo.abs() / hours_per_day);

    HoursBalance {
        worked_hours: worked,
        contract_hours: contract.get(),
        prorated_target: prorated,
        saldo,
        balance_type,
        severity,
        equivalent_days,
        message: message(balance_type, saldo, equivalent_days),
    }
}
