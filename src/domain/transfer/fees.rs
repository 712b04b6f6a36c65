use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Share of the asking price retained by the platform on a completed trade.
pub const COMMISSION_RATE: Decimal = dec!(0.05);

/// Commission split for a trade at a given price
///
/// The buyer pays the full asking price; the seller receives the price
/// minus the platform commission. `commission + seller_revenue` always
/// equals the price exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub commission: Decimal,
    pub seller_revenue: Decimal,
}

/// Splits an asking price into platform commission and seller revenue.
pub fn split(price: Decimal) -> FeeSplit {
    let commission = price * COMMISSION_RATE;
    FeeSplit {
        commission,
        seller_revenue: price - commission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_percent_commission() {
        let FeeSplit {
            commission,
            seller_revenue,
        } = split(dec!(1_000_000));

        assert_eq!(commission, dec!(50_000));
        assert_eq!(seller_revenue, dec!(950_000));
    }

    #[test]
    fn split_conserves_the_price() {
        for price in [dec!(1), dec!(333_333), dec!(999_999.99), dec!(2_500_000)] {
            let FeeSplit {
                commission,
                seller_revenue,
            } = split(price);
            assert_eq!(commission + seller_revenue, price);
        }
    }

    #[test]
    fn split_of_odd_price_keeps_exact_decimals() {
        let FeeSplit {
            commission,
            seller_revenue,
        } = split(dec!(100.01));

        assert_eq!(commission, dec!(5.0005));
        assert_eq!(seller_revenue, dec!(95.0095));
    }
}
