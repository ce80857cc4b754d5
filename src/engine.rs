//! Batch payslip runs.
//!
//! The `engine` module derives complete payslips for a whole employee
//! list at once.  It uses the [`rayon`] crate to parallelise the
//! per-employee derivation across CPU cores; each payslip depends only
//! on its own employee record, so the results are identical to a
//! sequential run and come back in input order.

use crate::models::{Employee, Payslip};
use crate::payroll::PayrollDeriver;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// The result of a batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipRun {
    pub month: String,
    pub year: String,
    /// One payslip per input employee, in input order.
    pub payslips: Vec<Payslip>,
    /// Sum of every payslip's net pay.
    pub total_net_pay: i64,
}

/// Derives a payslip, totals included, for every employee.
pub fn run_payslips(employees: &[Employee], deriver: &PayrollDeriver) -> PayslipRun {
    let template = deriver.default_template();
    let payslips: Vec<Payslip> = employees
        .par_iter()
        .map(|employee| deriver.derive(employee))
        .collect();
    let total_net_pay = payslips
        .iter()
        .map(|p| p.net_pay)
        .fold(0i64, i64::saturating_add);

    info!(
        employees = payslips.len(),
        total_net_pay,
        month = %template.month,
        year = %template.year,
        "completed payslip run"
    );
    PayslipRun {
        month: template.month,
        year: template.year,
        payslips,
        total_net_pay,
    }
}
