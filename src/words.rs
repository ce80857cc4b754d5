//! Amount-in-words rendering for the payslip.
//!
//! Amounts are grouped using the Indian numbering system: crore
//! (10^7), lakh (10^5), thousand (10^3), then the remaining hundreds.
//! Each group is rendered by the same hundreds converter.

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Renders a whole rupee amount, e.g. `1234567` becomes
/// `"Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven only"`.
///
/// Zero renders as `"Zero only"`.  The crore group is not split
/// further, so amounts of 100 crore and above render the crore count
/// through the hundreds converter as well (a thousand crore reads
/// "Ten Hundred Crore").
pub fn amount_in_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero only".to_string();
    }

    let mut words: Vec<&'static str> = Vec::new();
    let mut rest = amount;
    for (scale, label) in [(CRORE, "Crore"), (LAKH, "Lakh"), (THOUSAND, "Thousand")] {
        if rest >= scale {
            push_hundreds(&mut words, rest / scale);
            words.push(label);
            rest %= scale;
        }
    }
    if rest > 0 {
        push_hundreds(&mut words, rest);
    }

    format!("{} only", words.join(" "))
}

/// Words for a signed net pay.  Negative amounts render as zero.
pub fn net_pay_in_words(net_pay: i64) -> String {
    amount_in_words(u64::try_from(net_pay).unwrap_or(0))
}

fn push_hundreds(words: &mut Vec<&'static str>, mut num: u64) {
    if num >= 100 {
        // Counts of 10 or more hundreds only occur in the crore group.
        let hundreds = num / 100;
        if hundreds >= 10 {
            push_hundreds(words, hundreds);
        } else {
            words.push(ONES[hundreds as usize]);
        }
        words.push("Hundred");
        num %= 100;
    }

    if num >= 20 {
        words.push(TENS[(num / 10) as usize]);
        num %= 10;
    } else if num >= 10 {
        words.push(TEENS[(num - 10) as usize]);
        return;
    }

    if num > 0 {
        words.push(ONES[num as usize]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(amount_in_words(0), "Zero only");
    }

    #[test]
    fn small_amounts() {
        assert_eq!(amount_in_words(7), "Seven only");
        assert_eq!(amount_in_words(11), "Eleven only");
        assert_eq!(amount_in_words(19), "Nineteen only");
        assert_eq!(amount_in_words(20), "Twenty only");
        assert_eq!(amount_in_words(45), "Forty Five only");
        assert_eq!(amount_in_words(100), "One Hundred only");
        assert_eq!(amount_in_words(110), "One Hundred Ten only");
        assert_eq!(amount_in_words(999), "Nine Hundred Ninety Nine only");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(
            amount_in_words(1_234_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven only"
        );
        assert_eq!(amount_in_words(100_000), "One Lakh only");
        assert_eq!(amount_in_words(1_000), "One Thousand only");
        assert_eq!(amount_in_words(1_013), "One Thousand Thirteen only");
        assert_eq!(
            amount_in_words(12_345_678),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight only"
        );
        assert_eq!(amount_in_words(10_000_000), "One Crore only");
    }

    #[test]
    fn typical_net_pay() {
        // 80000 earnings less 6000 PF and 4000 TDS.
        assert_eq!(amount_in_words(70_000), "Seventy Thousand only");
        assert_eq!(
            amount_in_words(41_893),
            "Forty One Thousand Eight Hundred Ninety Three only"
        );
    }

    #[test]
    fn large_crore_counts() {
        assert_eq!(
            amount_in_words(9_990_000_000),
            "Nine Hundred Ninety Nine Crore only"
        );
        assert_eq!(amount_in_words(10_000_000_000), "Ten Hundred Crore only");
    }

    #[test]
    fn negative_net_pay_renders_zero() {
        assert_eq!(net_pay_in_words(-500), "Zero only");
        assert_eq!(net_pay_in_words(500), "Five Hundred only");
    }
}
