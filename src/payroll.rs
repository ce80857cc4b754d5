//! Payslip derivation.
//!
//! [`PayrollDeriver`] turns an [`Employee`] into a complete
//! [`Payslip`]: identity fields are copied, missing earnings are taken
//! from a designation tier, missing deductions are estimated from the
//! statutory rules, and the totals are summed.  Totals are never
//! recomputed implicitly; [`recompute_totals`] is a plain function and
//! [`PayslipForm`] calls it explicitly after every edit.

use crate::clock::Clock;
use crate::models::{
    EarningsAndDeductions, Employee, PayComponent, Payslip, Totals, BANK_TRANSFER, NOT_AVAILABLE,
};
use crate::words::net_pay_in_words;
use chrono::{DateTime, NaiveDate};
use std::sync::Arc;
use tracing::debug;

/// Standard working days in a month.
pub const DEFAULT_WORKED_DAYS: i64 = 22;

/// Rates are in basis points (1/100 of a percent).
const PF_RATE_BPS: i64 = 1_200;
/// Employee State Insurance applies up to the wage ceiling, inclusive.
const ESI_RATE_BPS: i64 = 75;
const ESI_WAGE_CEILING: i64 = 21_000;
/// Tax deducted at source applies strictly above the threshold.
const TDS_RATE_BPS: i64 = 500;
const TDS_THRESHOLD: i64 = 40_000;

/// Default monthly earnings for a designation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningDefaults {
    pub basic_pay: i64,
    pub hra: i64,
    pub others: i64,
    pub incentive: i64,
}

impl EarningDefaults {
    pub const fn new(basic_pay: i64, hra: i64, others: i64, incentive: i64) -> Self {
        Self {
            basic_pay,
            hra,
            others,
            incentive,
        }
    }
}

/// One rule of the designation ladder: if the lowercased designation
/// contains any of `keywords`, the tier's defaults apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignationTier {
    pub keywords: Vec<String>,
    pub defaults: EarningDefaults,
}

impl DesignationTier {
    pub fn new(keywords: &[&str], defaults: EarningDefaults) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            defaults,
        }
    }

    fn matches(&self, designation: &str) -> bool {
        self.keywords.iter().any(|k| designation.contains(k.as_str()))
    }
}

/// An ordered list of designation tiers plus the fallback used when no
/// tier matches.  The first matching tier wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignationLadder {
    tiers: Vec<DesignationTier>,
    fallback: EarningDefaults,
}

impl DesignationLadder {
    pub fn new(tiers: Vec<DesignationTier>, fallback: EarningDefaults) -> Self {
        Self { tiers, fallback }
    }

    pub fn defaults_for(&self, designation: &str) -> EarningDefaults {
        let designation = designation.to_lowercase();
        self.tiers
            .iter()
            .find(|tier| tier.matches(&designation))
            .map(|tier| tier.defaults)
            .unwrap_or(self.fallback)
    }
}

impl Default for DesignationLadder {
    fn default() -> Self {
        Self::new(
            vec![
                DesignationTier::new(&["intern"], EarningDefaults::new(15_000, 6_000, 1_500, 1_000)),
                DesignationTier::new(
                    &["senior", "lead"],
                    EarningDefaults::new(50_000, 20_000, 5_000, 5_000),
                ),
                DesignationTier::new(
                    &["manager"],
                    EarningDefaults::new(80_000, 32_000, 8_000, 8_000),
                ),
            ],
            EarningDefaults::new(30_000, 12_000, 3_000, 2_000),
        )
    }
}

/// Sums earnings and deductions.  Missing fields count as zero.
/// Sums saturate at the `i64` bounds instead of overflowing.
pub fn recompute_totals(fields: &EarningsAndDeductions) -> Totals {
    let sum = |components: [PayComponent; 4]| -> i64 {
        components
            .iter()
            .map(|c| fields.get(*c).unwrap_or(0))
            .fold(0i64, i64::saturating_add)
    };
    let total_earnings = sum(PayComponent::EARNINGS);
    let total_deductions = sum(PayComponent::DEDUCTIONS);
    Totals {
        total_earnings,
        total_deductions,
        net_pay: total_earnings.saturating_sub(total_deductions),
    }
}

/// Writes `totals` and the net pay in words onto `payslip`.
pub fn apply_totals(payslip: &mut Payslip, totals: Totals) {
    payslip.total_earnings = totals.total_earnings;
    payslip.total_deductions = totals.total_deductions;
    payslip.net_pay = totals.net_pay;
    payslip.amount_in_words = net_pay_in_words(totals.net_pay);
}

/// `amount * bps / 10_000`, rounded to the nearest rupee with halves
/// away from zero.
fn percent_of(amount: i64, bps: i64) -> i64 {
    let scaled = amount.saturating_mul(bps);
    let rounded = (scaled.unsigned_abs() + 5_000) / 10_000;
    (rounded as i64) * scaled.signum()
}

/// `DD/MM/YYYY`, or "N/A" when the upstream value cannot be read.
pub fn format_join_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Derives payslips from employee records.
#[derive(Clone)]
pub struct PayrollDeriver {
    clock: Arc<dyn Clock>,
    ladder: DesignationLadder,
}

impl std::fmt::Debug for PayrollDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayrollDeriver")
            .field("period", &self.clock.year_month())
            .field("ladder", &self.ladder)
            .finish()
    }
}

impl PayrollDeriver {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self::with_ladder(Arc::new(clock), DesignationLadder::default())
    }

    pub fn with_ladder(clock: Arc<dyn Clock>, ladder: DesignationLadder) -> Self {
        Self { clock, ladder }
    }

    /// The blank payslip shown before any employee is selected.
    pub fn default_template(&self) -> Payslip {
        let na = || NOT_AVAILABLE.to_string();
        Payslip {
            month: self.clock.month_name(),
            year: self.clock.year_string(),
            employee_name: na(),
            work_location: na(),
            employee_id: na(),
            wwt_id: na(),
            designation: na(),
            department: na(),
            bank_account: na(),
            joining_date: na(),
            uan: na(),
            esi_number: na(),
            pan: na(),
            worked_days: 0,
            lop_days: 0,
            basic_pay: 0,
            hra: 0,
            others: 0,
            incentive: 0,
            pf: 0,
            esi: 0,
            tds: 0,
            staff_advance: 0,
            total_earnings: 0,
            total_deductions: 0,
            net_pay: 0,
            amount_in_words: "Zero only".to_string(),
            payment_mode: BANK_TRANSFER.to_string(),
            additional_field: na(),
        }
    }

    /// Resolves the eight money fields for `employee`: overrides where
    /// present (an explicit zero included), computed defaults otherwise.
    pub fn resolve_components(&self, employee: &Employee) -> EarningsAndDeductions {
        let overrides = &employee.payroll;
        let tier = self.ladder.defaults_for(&employee.designation);

        let basic_pay = overrides.basic_pay.unwrap_or(tier.basic_pay);
        let hra = overrides.hra.unwrap_or(tier.hra);
        let others = overrides.others.unwrap_or(tier.others);
        let incentive = overrides.incentive.unwrap_or(tier.incentive);
        let earnings = [basic_pay, hra, others, incentive]
            .into_iter()
            .fold(0i64, i64::saturating_add);

        let pf = overrides.pf.unwrap_or_else(|| percent_of(basic_pay, PF_RATE_BPS));
        let esi = overrides.esi.unwrap_or_else(|| {
            if earnings <= ESI_WAGE_CEILING {
                percent_of(earnings, ESI_RATE_BPS)
            } else {
                0
            }
        });
        let tds = overrides.tds.unwrap_or_else(|| {
            if earnings > TDS_THRESHOLD {
                percent_of(earnings, TDS_RATE_BPS)
            } else {
                0
            }
        });
        let staff_advance = overrides.staff_advance.unwrap_or(0);

        EarningsAndDeductions {
            basic_pay: Some(basic_pay),
            hra: Some(hra),
            others: Some(others),
            incentive: Some(incentive),
            pf: Some(pf),
            esi: Some(esi),
            tds: Some(tds),
            staff_advance: Some(staff_advance),
        }
    }

    /// Builds the payroll section of a payslip for `employee`.
    ///
    /// The totals and amount in words are left at the template values;
    /// only [`PayrollDeriver::derive`] and [`PayslipForm`] hand the
    /// result out, after merging [`recompute_totals`] into it.
    pub(crate) fn from_employee(&self, employee: &Employee) -> Payslip {
        let fields = self.resolve_components(employee);
        let mut payslip = Payslip {
            employee_name: employee.name.clone(),
            work_location: employee.work_location.clone(),
            employee_id: employee.id.clone(),
            wwt_id: employee
                .wwt_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| employee.id.clone()),
            designation: employee.designation.clone(),
            department: employee.department.clone(),
            bank_account: employee.bank_account.clone(),
            joining_date: format_join_date(&employee.join_date),
            uan: or_not_available(&employee.uan),
            esi_number: or_not_available(&employee.esi_number),
            pan: employee.pan.clone(),
            worked_days: DEFAULT_WORKED_DAYS,
            lop_days: 0,
            additional_field: employee
                .additional_field
                .as_deref()
                .map(or_not_available)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ..self.default_template()
        };
        for component in PayComponent::EARNINGS
            .into_iter()
            .chain(PayComponent::DEDUCTIONS)
        {
            payslip.set_component(component, fields.get(component).unwrap_or(0));
        }

        debug!(
            employee_id = %employee.id,
            designation = %employee.designation,
            basic_pay = payslip.basic_pay,
            "derived payroll components"
        );
        payslip
    }

    /// [`PayrollDeriver::from_employee`] with totals and words filled in.
    pub fn derive(&self, employee: &Employee) -> Payslip {
        let mut payslip = self.from_employee(employee);
        let totals = recompute_totals(&payslip.fields());
        apply_totals(&mut payslip, totals);
        payslip
    }
}

/// Editable payslip state.
///
/// Every mutation ends with an explicit call to [`PayslipForm::recompute`],
/// so the totals on [`PayslipForm::payslip`] always agree with its
/// components.
#[derive(Debug, Clone)]
pub struct PayslipForm {
    deriver: PayrollDeriver,
    payslip: Payslip,
    selected: Option<String>,
}

impl PayslipForm {
    /// A form showing the default template, with no employee selected.
    pub fn new(deriver: PayrollDeriver) -> Self {
        let payslip = deriver.default_template();
        Self {
            deriver,
            payslip,
            selected: None,
        }
    }

    /// A form populated from `employee`.
    pub fn for_employee(deriver: PayrollDeriver, employee: &Employee) -> Self {
        let mut form = Self::new(deriver);
        form.select(employee);
        form
    }

    pub fn payslip(&self) -> &Payslip {
        &self.payslip
    }

    pub fn into_payslip(self) -> Payslip {
        self.payslip
    }

    /// Id of the selected employee, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Replaces the whole payslip with one derived from `employee`.
    pub fn select(&mut self, employee: &Employee) {
        self.payslip = self.deriver.from_employee(employee);
        self.selected = Some(employee.id.clone());
        self.recompute();
    }

    /// Clears the selection and shows the default template again.
    pub fn reset(&mut self) {
        self.payslip = self.deriver.default_template();
        self.selected = None;
    }

    /// Sets one earning or deduction.  An emptied field (`None`) is
    /// stored as zero; it does not bring back the designation default.
    pub fn set_component(&mut self, component: PayComponent, amount: Option<i64>) {
        self.payslip.set_component(component, amount.unwrap_or(0));
        self.recompute();
    }

    pub fn set_days(&mut self, worked_days: i64, lop_days: i64) {
        self.payslip.worked_days = worked_days;
        self.payslip.lop_days = lop_days;
    }

    /// Recomputes totals and words from the current components.
    /// Idempotent.
    pub fn recompute(&mut self) -> Totals {
        let totals = recompute_totals(&self.payslip.fields());
        apply_totals(&mut self.payslip, totals);
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::PayrollOverrides;

    fn deriver() -> PayrollDeriver {
        PayrollDeriver::new(FixedClock::new(2025, 10))
    }

    fn employee(designation: &str) -> Employee {
        Employee {
            id: "emp-1".into(),
            name: "Kavya Iyer".into(),
            email: "kavya@example.com".into(),
            department: "Engineering".into(),
            designation: designation.into(),
            work_location: "Bengaluru".into(),
            bank_account: "001122".into(),
            uan: "UAN-9".into(),
            pan: "ABCDE1234F".into(),
            join_date: "2023-04-07".into(),
            status: true,
            ..Employee::default()
        }
    }

    fn with_earnings(basic: i64, hra: i64, others: i64, incentive: i64) -> Employee {
        let mut e = employee("Engineer");
        e.payroll = PayrollOverrides {
            basic_pay: Some(basic),
            hra: Some(hra),
            others: Some(others),
            incentive: Some(incentive),
            ..PayrollOverrides::default()
        };
        e
    }

    #[test]
    fn default_template_is_blank() {
        let slip = deriver().default_template();
        assert_eq!(slip.month, "October");
        assert_eq!(slip.year, "2025");
        assert_eq!(slip.employee_name, "N/A");
        assert_eq!(slip.joining_date, "N/A");
        assert_eq!(slip.worked_days, 0);
        assert_eq!(slip.net_pay, 0);
        assert_eq!(slip.amount_in_words, "Zero only");
        assert_eq!(slip.payment_mode, "Bank Transfer");
    }

    #[test]
    fn senior_engineer_tier() {
        let slip = deriver().derive(&employee("Senior Engineer"));
        assert_eq!(
            (slip.basic_pay, slip.hra, slip.others, slip.incentive),
            (50_000, 20_000, 5_000, 5_000)
        );
        assert_eq!(slip.total_earnings, 80_000);
        assert_eq!(slip.pf, 6_000);
        assert_eq!(slip.esi, 0);
        assert_eq!(slip.tds, 4_000);
        assert_eq!(slip.staff_advance, 0);
        assert_eq!(slip.total_deductions, 10_000);
        assert_eq!(slip.net_pay, 70_000);
        assert_eq!(slip.amount_in_words, "Seventy Thousand only");
    }

    #[test]
    fn tiers_are_checked_in_order() {
        let d = deriver();
        let basic = |designation: &str| d.from_employee(&employee(designation)).basic_pay;
        assert_eq!(basic("Software Intern"), 15_000);
        assert_eq!(basic("Senior Intern"), 15_000);
        assert_eq!(basic("Team LEAD"), 50_000);
        assert_eq!(basic("Senior Manager"), 50_000);
        assert_eq!(basic("Project Manager"), 80_000);
        assert_eq!(basic("Engineer"), 30_000);
        assert_eq!(basic(""), 30_000);
    }

    #[test]
    fn custom_ladder() {
        let ladder = DesignationLadder::new(
            vec![DesignationTier::new(
                &["Director"],
                EarningDefaults::new(1, 2, 3, 4),
            )],
            EarningDefaults::new(0, 0, 0, 0),
        );
        let d = PayrollDeriver::with_ladder(Arc::new(FixedClock::new(2025, 1)), ladder);
        assert_eq!(d.from_employee(&employee("director of ops")).incentive, 4);
        assert_eq!(d.from_employee(&employee("Engineer")).basic_pay, 0);
    }

    #[test]
    fn explicit_zero_overrides_the_default() {
        let mut e = employee("Manager");
        e.payroll.basic_pay = Some(0);
        let slip = deriver().derive(&e);
        assert_eq!(slip.basic_pay, 0);
        assert_eq!(slip.hra, 32_000);
        assert_eq!(slip.pf, 0);
    }

    #[test]
    fn deduction_overrides_win() {
        let mut e = employee("Engineer");
        e.payroll.pf = Some(1_800);
        e.payroll.tds = Some(0);
        e.payroll.esi = Some(25);
        e.payroll.staff_advance = Some(500);
        let slip = deriver().derive(&e);
        assert_eq!((slip.pf, slip.esi, slip.tds, slip.staff_advance), (1_800, 25, 0, 500));
        assert_eq!(slip.total_deductions, 2_325);
        assert_eq!(slip.net_pay, 47_000 - 2_325);
    }

    #[test]
    fn esi_boundary() {
        let d = deriver();
        let at = d.from_employee(&with_earnings(21_000, 0, 0, 0));
        assert_eq!(at.esi, 158); // 157.5 rounds up
        let above = d.from_employee(&with_earnings(21_001, 0, 0, 0));
        assert_eq!(above.esi, 0);
    }

    #[test]
    fn tds_boundary() {
        let d = deriver();
        let at = d.from_employee(&with_earnings(30_000, 10_000, 0, 0));
        assert_eq!(at.tds, 0);
        let above = d.from_employee(&with_earnings(30_000, 10_000, 1, 0));
        assert_eq!(above.tds, 2_000);
    }

    #[test]
    fn percent_rounds_halves_away_from_zero() {
        assert_eq!(percent_of(21_000, 75), 158);
        assert_eq!(percent_of(-21_000, 75), -158);
        assert_eq!(percent_of(0, 1_200), 0);
    }

    #[test]
    fn pf_rounds_to_nearest_rupee() {
        let slip = deriver().from_employee(&with_earnings(12_345, 0, 0, 0));
        assert_eq!(slip.pf, 1_481); // 1481.4
        let slip = deriver().from_employee(&with_earnings(12_375, 0, 0, 0));
        assert_eq!(slip.pf, 1_485);
    }

    #[test]
    fn intern_gets_esi_and_no_tds() {
        let slip = deriver().derive(&employee("Intern"));
        assert_eq!(slip.total_earnings, 23_500);
        assert_eq!(slip.esi, 0);
        assert_eq!(slip.tds, 0);
        assert_eq!(slip.pf, 1_800);
    }

    #[test]
    fn identity_fields_are_copied() {
        let mut e = employee("Engineer");
        e.additional_field = Some("Night shift".into());
        let slip = deriver().from_employee(&e);
        assert_eq!(slip.employee_name, "Kavya Iyer");
        assert_eq!(slip.employee_id, "emp-1");
        assert_eq!(slip.wwt_id, "emp-1");
        assert_eq!(slip.joining_date, "07/04/2023");
        assert_eq!(slip.uan, "UAN-9");
        assert_eq!(slip.esi_number, "N/A");
        assert_eq!(slip.worked_days, 22);
        assert_eq!(slip.lop_days, 0);
        assert_eq!(slip.additional_field, "Night shift");
        assert_eq!(slip.month, "October");
        assert_eq!(slip.payment_mode, "Bank Transfer");
    }

    #[test]
    fn wwt_id_is_used_when_present() {
        let mut e = employee("Engineer");
        e.wwt_id = Some("WWT-42".into());
        assert_eq!(deriver().from_employee(&e).wwt_id, "WWT-42");
        e.wwt_id = Some(String::new());
        assert_eq!(deriver().from_employee(&e).wwt_id, "emp-1");
    }

    #[test]
    fn join_date_formats() {
        assert_eq!(format_join_date("2021-12-31"), "31/12/2021");
        assert_eq!(format_join_date("2021-01-05T10:00:00.000Z"), "05/01/2021");
        assert_eq!(format_join_date("not a date"), "N/A");
        assert_eq!(format_join_date(""), "N/A");
    }

    #[test]
    fn employee_record_is_not_mutated() {
        let e = employee("Lead");
        let before = e.clone();
        let _ = deriver().derive(&e);
        assert_eq!(e, before);
    }

    #[test]
    fn totals_treat_missing_as_zero() {
        let fields = EarningsAndDeductions {
            basic_pay: Some(10_000),
            hra: None,
            others: Some(0),
            incentive: Some(500),
            pf: Some(1_200),
            esi: None,
            tds: None,
            staff_advance: Some(300),
        };
        let totals = recompute_totals(&fields);
        assert_eq!(totals.total_earnings, 10_500);
        assert_eq!(totals.total_deductions, 1_500);
        assert_eq!(totals.net_pay, 9_000);
        assert_eq!(recompute_totals(&fields), totals);
        assert_eq!(recompute_totals(&EarningsAndDeductions::default()), Totals::default());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let fields = EarningsAndDeductions {
            basic_pay: Some(i64::MAX),
            hra: Some(1),
            pf: Some(i64::MIN),
            esi: Some(-1),
            ..EarningsAndDeductions::default()
        };
        let totals = recompute_totals(&fields);
        assert_eq!(totals.total_earnings, i64::MAX);
        assert_eq!(totals.total_deductions, i64::MIN);
        assert_eq!(totals.net_pay, i64::MAX);
    }

    #[test]
    fn huge_overrides_derive_without_panicking() {
        let mut e = with_earnings(i64::MAX, i64::MAX, 0, 0);
        e.payroll.pf = Some(0);
        e.payroll.tds = Some(0);
        let slip = deriver().derive(&e);
        assert_eq!(slip.total_earnings, i64::MAX);
        assert_eq!(slip.esi, 0);
        assert_eq!(slip.net_pay, i64::MAX);
    }

    #[test]
    fn derived_payslip_satisfies_totals_invariant() {
        for designation in ["Intern", "Senior Engineer", "Manager", "Engineer"] {
            let slip = deriver().derive(&employee(designation));
            assert_eq!(
                slip.total_earnings,
                slip.basic_pay + slip.hra + slip.others + slip.incentive
            );
            assert_eq!(
                slip.total_deductions,
                slip.pf + slip.esi + slip.tds + slip.staff_advance
            );
            assert_eq!(slip.net_pay, slip.total_earnings - slip.total_deductions);
        }
    }

    #[test]
    fn form_recomputes_after_every_edit() {
        let mut form = PayslipForm::for_employee(deriver(), &employee("Senior Engineer"));
        assert_eq!(form.selected(), Some("emp-1"));
        assert_eq!(form.payslip().net_pay, 70_000);

        form.set_component(PayComponent::Incentive, Some(10_000));
        assert_eq!(form.payslip().total_earnings, 85_000);
        assert_eq!(form.payslip().net_pay, 75_000);

        form.set_component(PayComponent::StaffAdvance, Some(1_234));
        let slip = form.payslip();
        assert_eq!(slip.total_deductions, 11_234);
        assert_eq!(slip.net_pay, slip.total_earnings - slip.total_deductions);
        assert_eq!(
            slip.amount_in_words,
            "Seventy Three Thousand Seven Hundred Sixty Six only"
        );
    }

    #[test]
    fn emptied_field_is_zero_not_default() {
        let mut form = PayslipForm::for_employee(deriver(), &employee("Manager"));
        form.set_component(PayComponent::BasicPay, None);
        assert_eq!(form.payslip().basic_pay, 0);
        assert_eq!(form.payslip().total_earnings, 48_000);
        // Deductions were derived at selection time and stay as they were.
        assert_eq!(form.payslip().pf, 9_600);
    }

    #[test]
    fn negative_net_pay_keeps_sign() {
        let mut form = PayslipForm::for_employee(deriver(), &employee("Intern"));
        form.set_component(PayComponent::StaffAdvance, Some(50_000));
        assert!(form.payslip().net_pay < 0);
        assert_eq!(form.payslip().amount_in_words, "Zero only");
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut form = PayslipForm::for_employee(deriver(), &employee("Engineer"));
        let first = form.recompute();
        let snapshot = form.payslip().clone();
        assert_eq!(form.recompute(), first);
        assert_eq!(form.payslip(), &snapshot);
    }

    #[test]
    fn reset_restores_template() {
        let d = deriver();
        let mut form = PayslipForm::for_employee(d.clone(), &employee("Engineer"));
        form.set_days(20, 2);
        assert_eq!(form.payslip().lop_days, 2);
        form.reset();
        assert_eq!(form.selected(), None);
        assert_eq!(form.payslip(), &d.default_template());
    }
}
