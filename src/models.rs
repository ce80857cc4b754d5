//! Data models for the Payslip Engine.
//!
//! The `models` module defines the serialisable structs and enums
//! shared by the query and payroll components: the employee record as
//! delivered by the upstream directory service, and the payslip that
//! is derived from it.  Employees deserialise from the upstream
//! camelCase wire names; payslips serialise camelCase for the form and
//! export layers.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder rendered for identity fields that have no value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Payment mode printed on every payslip.
pub const BANK_TRANSFER: &str = "Bank Transfer";

/// Reads a JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Access role of a directory record.  Only `Employee` records are
/// shown in the list by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Employee,
}

/// Optional payroll overrides carried on an employee record.
///
/// Each field distinguishes "absent" (`None`, defaulting applies) from
/// an explicit amount, including an explicit zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollOverrides {
    #[serde(default)]
    pub basic_pay: Option<i64>,
    #[serde(default)]
    pub hra: Option<i64>,
    #[serde(default)]
    pub others: Option<i64>,
    #[serde(default)]
    pub incentive: Option<i64>,
    #[serde(default)]
    pub pf: Option<i64>,
    #[serde(default)]
    pub esi: Option<i64>,
    #[serde(default)]
    pub tds: Option<i64>,
    #[serde(default)]
    pub staff_advance: Option<i64>,
}

/// An employee as returned by the directory service.
///
/// Records are treated as immutable once received; every derived value
/// is copied into a new structure.  Missing text fields deserialise as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque identifier assigned by the directory.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(
        rename = "employeeName",
        alias = "name",
        default,
        deserialize_with = "null_as_default"
    )]
    pub name: String,
    #[serde(
        rename = "employeeEmail",
        alias = "email",
        default,
        deserialize_with = "null_as_default"
    )]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bank_account: String,
    #[serde(
        rename = "uanNumber",
        alias = "uan",
        default,
        deserialize_with = "null_as_default"
    )]
    pub uan: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub esi_number: String,
    #[serde(
        rename = "panNumber",
        alias = "pan",
        default,
        deserialize_with = "null_as_default"
    )]
    pub pan: String,
    /// Joining date as sent upstream: an ISO-8601 date or RFC 3339
    /// timestamp.  Kept verbatim; sorting uses this representation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub join_date: String,
    /// `true` when the employee is active.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: bool,
    /// Secondary workforce identifier, when issued.
    #[serde(default)]
    pub wwt_id: Option<String>,
    #[serde(default, alias = "additionalFiled")]
    pub additional_field: Option<String>,
    #[serde(flatten)]
    pub payroll: PayrollOverrides,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status
    }
}

/// One earning or deduction line of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayComponent {
    BasicPay,
    Hra,
    Others,
    Incentive,
    Pf,
    Esi,
    Tds,
    StaffAdvance,
}

impl PayComponent {
    pub const EARNINGS: [PayComponent; 4] = [
        PayComponent::BasicPay,
        PayComponent::Hra,
        PayComponent::Others,
        PayComponent::Incentive,
    ];

    pub const DEDUCTIONS: [PayComponent; 4] = [
        PayComponent::Pf,
        PayComponent::Esi,
        PayComponent::Tds,
        PayComponent::StaffAdvance,
    ];
}

/// The eight editable money fields of a payslip.  Any field may be
/// missing, in which case it counts as zero when totals are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsAndDeductions {
    #[serde(default)]
    pub basic_pay: Option<i64>,
    #[serde(default)]
    pub hra: Option<i64>,
    #[serde(default)]
    pub others: Option<i64>,
    #[serde(default)]
    pub incentive: Option<i64>,
    #[serde(default)]
    pub pf: Option<i64>,
    #[serde(default)]
    pub esi: Option<i64>,
    #[serde(default)]
    pub tds: Option<i64>,
    #[serde(default)]
    pub staff_advance: Option<i64>,
}

impl EarningsAndDeductions {
    pub fn get(&self, component: PayComponent) -> Option<i64> {
        match component {
            PayComponent::BasicPay => self.basic_pay,
            PayComponent::Hra => self.hra,
            PayComponent::Others => self.others,
            PayComponent::Incentive => self.incentive,
            PayComponent::Pf => self.pf,
            PayComponent::Esi => self.esi,
            PayComponent::Tds => self.tds,
            PayComponent::StaffAdvance => self.staff_advance,
        }
    }
}

/// The three derived figures of a payslip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_earnings: i64,
    pub total_deductions: i64,
    pub net_pay: i64,
}

/// A flat record of one pay period for one employee.
///
/// Every field is a plain string or number so that the export layer
/// never sees an undefined value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Full English month name, e.g. `"October"`.
    pub month: String,
    pub year: String,
    pub employee_name: String,
    pub work_location: String,
    pub employee_id: String,
    pub wwt_id: String,
    pub designation: String,
    pub department: String,
    pub bank_account: String,
    /// `DD/MM/YYYY`.
    pub joining_date: String,
    pub uan: String,
    pub esi_number: String,
    pub pan: String,
    pub worked_days: i64,
    pub lop_days: i64,
    pub basic_pay: i64,
    pub hra: i64,
    pub others: i64,
    pub incentive: i64,
    pub pf: i64,
    pub esi: i64,
    pub tds: i64,
    pub staff_advance: i64,
    pub total_earnings: i64,
    pub total_deductions: i64,
    pub net_pay: i64,
    pub amount_in_words: String,
    pub payment_mode: String,
    pub additional_field: String,
}

impl Payslip {
    pub fn component(&self, component: PayComponent) -> i64 {
        match component {
            PayComponent::BasicPay => self.basic_pay,
            PayComponent::Hra => self.hra,
            PayComponent::Others => self.others,
            PayComponent::Incentive => self.incentive,
            PayComponent::Pf => self.pf,
            PayComponent::Esi => self.esi,
            PayComponent::Tds => self.tds,
            PayComponent::StaffAdvance => self.staff_advance,
        }
    }

    pub fn set_component(&mut self, component: PayComponent, amount: i64) {
        let slot = match component {
            PayComponent::BasicPay => &mut self.basic_pay,
            PayComponent::Hra => &mut self.hra,
            PayComponent::Others => &mut self.others,
            PayComponent::Incentive => &mut self.incentive,
            PayComponent::Pf => &mut self.pf,
            PayComponent::Esi => &mut self.esi,
            PayComponent::Tds => &mut self.tds,
            PayComponent::StaffAdvance => &mut self.staff_advance,
        };
        *slot = amount;
    }

    /// The eight money fields, all present.
    pub fn fields(&self) -> EarningsAndDeductions {
        EarningsAndDeductions {
            basic_pay: Some(self.basic_pay),
            hra: Some(self.hra),
            others: Some(self.others),
            incentive: Some(self.incentive),
            pf: Some(self.pf),
            esi: Some(self.esi),
            tds: Some(self.tds),
            staff_advance: Some(self.staff_advance),
        }
    }

    pub fn totals(&self) -> Totals {
        Totals {
            total_earnings: self.total_earnings,
            total_deductions: self.total_deductions,
            net_pay: self.net_pay,
        }
    }

    /// File name used when the payslip is exported as a PDF.
    pub fn export_file_name(&self) -> String {
        format!(
            "{}_Payslip_{}_{}.pdf",
            self.employee_name, self.month, self.year
        )
    }
}
