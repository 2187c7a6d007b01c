//! Order Lines

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{catalog::Catalog, ids::LineId, orders::AmountOverflow};

/// Total for a line: `quantity x unit_price x (1 - discount / 100)`.
///
/// No rounding is applied.
///
/// # Errors
///
/// Returns [`AmountOverflow`] when the total does not fit in a [`Decimal`].
pub fn line_total(
    quantity: u32,
    unit_price: Decimal,
    discount: Decimal,
) -> Result<Decimal, AmountOverflow> {
    let subtotal = Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or(AmountOverflow)?;

    let rate = Percentage::from(discount / Decimal::ONE_HUNDRED) * Decimal::ONE;

    rate.checked_mul(subtotal)
        .and_then(|discounted| subtotal.checked_sub(discounted))
        .ok_or(AmountOverflow)
}

/// A committed order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    id: LineId,
    code: String,
    description: String,
    quantity: u32,
    unit_price: Decimal,
    discount: Decimal,
    negotiated_discount: bool,
}

impl OrderLine {
    /// Line identifier
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Product code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Product description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Units ordered
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price per unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Discount in percent points (0 to 100)
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Whether the discount was negotiated with the customer
    pub fn negotiated_discount(&self) -> bool {
        self.negotiated_discount
    }

    /// Line total, derived from the current quantity, price and discount.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the total does not fit in a [`Decimal`].
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        line_total(self.quantity, self.unit_price, self.discount)
    }

    fn apply(&mut self, update: LineUpdate) {
        match update {
            LineUpdate::Quantity(quantity) => self.quantity = quantity,
            LineUpdate::UnitPrice(unit_price) => self.unit_price = unit_price,
            LineUpdate::Discount(discount) => self.discount = discount,
            LineUpdate::NegotiatedDiscount(flag) => self.negotiated_discount = flag,
        }
    }
}

/// A change to one field of a committed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpdate {
    /// New quantity
    Quantity(u32),
    /// New unit price
    UnitPrice(Decimal),
    /// New discount, in percent points
    Discount(Decimal),
    /// New negotiated-discount flag
    NegotiatedDiscount(bool),
}

impl LineUpdate {
    /// Whether the update changes the line total.
    pub fn affects_total(&self) -> bool {
        !matches!(self, Self::NegotiatedDiscount(_))
    }
}

/// Product picked for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedProduct {
    /// Product code
    pub code: String,

    /// Product description
    pub description: String,
}

/// Input fields for the line being entered, kept apart from committed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDraft {
    selected: Option<SelectedProduct>,
    quantity: u32,
    unit_price: Decimal,
    discount: Decimal,
    negotiated_discount: bool,
}

impl Default for LineDraft {
    fn default() -> Self {
        Self {
            selected: None,
            quantity: 1,
            unit_price: Decimal::ZERO,
            discount: Decimal::ZERO,
            negotiated_discount: false,
        }
    }
}

impl LineDraft {
    /// Select `code` from the catalog and seed the unit price from `country`.
    ///
    /// Nothing changes when the product is unknown or the country is unset.
    /// A product without a price in `country` seeds a price of zero.
    pub fn select(&mut self, catalog: &Catalog, code: &str, country: &str) -> bool {
        let Some(product) = catalog.get(code) else {
            return false;
        };

        if country.is_empty() {
            return false;
        }

        self.set_product(&product.code, &product.description);
        self.unit_price = product.price_in(country).unwrap_or(Decimal::ZERO);

        true
    }

    /// Select a product directly, leaving the unit price untouched.
    pub fn set_product(&mut self, code: impl Into<String>, description: impl Into<String>) {
        self.selected = Some(SelectedProduct {
            code: code.into(),
            description: description.into(),
        });
    }

    /// Set the quantity.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Set the unit price.
    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
    }

    /// Set the discount, in percent points.
    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = discount;
    }

    /// Set the negotiated-discount flag.
    pub fn set_negotiated_discount(&mut self, negotiated: bool) {
        self.negotiated_discount = negotiated;
    }

    /// Currently selected product, if any.
    pub fn selected(&self) -> Option<&SelectedProduct> {
        self.selected.as_ref()
    }

    /// Draft quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Draft unit price
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Draft discount
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Draft negotiated-discount flag
    pub fn negotiated_discount(&self) -> bool {
        self.negotiated_discount
    }

    /// Total the line would have if committed now.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the total does not fit in a [`Decimal`].
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        line_total(self.quantity, self.unit_price, self.discount)
    }

    /// Return every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Committed lines of an order, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderLines(Vec<OrderLine>);

impl OrderLines {
    /// Commit the draft as a new line and reset the draft.
    ///
    /// Returns `None`, leaving the draft untouched, when no product is selected.
    pub fn commit(&mut self, draft: &mut LineDraft) -> Option<LineId> {
        let selected = draft.selected.take()?;
        let id = LineId::new();

        self.0.push(OrderLine {
            id,
            code: selected.code,
            description: selected.description,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            discount: draft.discount,
            negotiated_discount: draft.negotiated_discount,
        });

        draft.reset();

        Some(id)
    }

    /// Apply `update` to the line with `id`. Returns `false` if there is no such line.
    pub fn update(&mut self, id: LineId, update: LineUpdate) -> bool {
        match self.0.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the line with `id`. Returns `false` if there is no such line.
    pub fn remove(&mut self, id: LineId) -> bool {
        let before = self.0.len();

        self.0.retain(|line| line.id != id);

        self.0.len() != before
    }

    /// Line with `id`.
    pub fn get(&self, id: LineId) -> Option<&OrderLine> {
        self.0.iter().find(|line| line.id == id)
    }

    /// Lines in entry order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderLine> {
        self.0.iter()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all line totals.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when a line total or the sum does not fit in a [`Decimal`].
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        self.0.iter().try_fold(Decimal::ZERO, |sum, line| {
            sum.checked_add(line.total()?).ok_or(AmountOverflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::test_support::product;

    use super::*;

    fn draft(code: &str, quantity: u32, price: i64, discount: i64) -> LineDraft {
        let mut draft = LineDraft::default();

        draft.set_product(code, code);
        draft.set_quantity(quantity);
        draft.set_unit_price(Decimal::from(price));
        draft.set_discount(Decimal::from(discount));

        draft
    }

    #[test]
    fn line_total_applies_discount() -> TestResult {
        assert_eq!(line_total(2, Decimal::from(100), Decimal::ZERO)?, Decimal::from(200));
        assert_eq!(line_total(1, Decimal::from(50), Decimal::TEN)?, Decimal::from(45));
        assert_eq!(line_total(3, Decimal::from(80), Decimal::ONE_HUNDRED)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn line_total_overflow_is_an_error() {
        let half = Decimal::MAX / Decimal::TWO + Decimal::ONE;

        assert_eq!(line_total(3, half, Decimal::ZERO), Err(AmountOverflow));
        assert_eq!(line_total(4_000_000_000, Decimal::MAX, Decimal::TEN), Err(AmountOverflow));
        assert_eq!(line_total(1, Decimal::MAX, Decimal::ZERO), Ok(Decimal::MAX));
    }

    #[test]
    fn order_total_overflow_is_an_error() -> TestResult {
        let mut lines = OrderLines::default();

        for code in ["PROD001", "PROD002"] {
            let mut draft = LineDraft::default();
            draft.set_product(code, code);
            draft.set_unit_price(Decimal::MAX);
            lines.commit(&mut draft).ok_or("commit")?;
        }

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.total(), Err(AmountOverflow));

        Ok(())
    }

    #[test]
    fn commit_appends_and_resets_draft() -> TestResult {
        let mut lines = OrderLines::default();
        let mut draft = draft("PROD001", 2, 100, 5);
        draft.set_negotiated_discount(true);

        let id = lines.commit(&mut draft).ok_or("commit should succeed")?;
        let line = lines.get(id).ok_or("line should exist")?;

        assert_eq!(line.code(), "PROD001");
        assert_eq!(line.quantity(), 2);
        assert!(line.negotiated_discount());
        assert_eq!(line.total()?, Decimal::from(190));
        assert_eq!(draft, LineDraft::default());

        Ok(())
    }

    #[test]
    fn commit_without_selection_does_nothing() {
        let mut lines = OrderLines::default();
        let mut draft = LineDraft::default();
        draft.set_quantity(4);

        assert_eq!(lines.commit(&mut draft), None);
        assert!(lines.is_empty());
        assert_eq!(draft.quantity(), 4);
    }

    #[test]
    fn order_total_sums_lines() -> TestResult {
        let mut lines = OrderLines::default();

        lines.commit(&mut draft("PROD001", 2, 100, 0));
        lines.commit(&mut draft("PROD002", 1, 50, 10));

        assert_eq!(lines.total()?, Decimal::from(245));

        Ok(())
    }

    #[test]
    fn update_order_does_not_change_total() -> TestResult {
        let mut first = OrderLines::default();
        let mut second = OrderLines::default();
        let a = first.commit(&mut draft("PROD001", 1, 120, 0)).ok_or("commit")?;
        let b = second.commit(&mut draft("PROD001", 1, 120, 0)).ok_or("commit")?;

        first.update(a, LineUpdate::Quantity(3));
        first.update(a, LineUpdate::Discount(Decimal::from(15)));
        second.update(b, LineUpdate::Discount(Decimal::from(15)));
        second.update(b, LineUpdate::Quantity(3));

        assert_eq!(first.total(), second.total());
        assert_eq!(first.total()?, Decimal::from(306));

        Ok(())
    }

    #[test]
    fn flag_update_keeps_total() -> TestResult {
        let mut lines = OrderLines::default();
        let id = lines.commit(&mut draft("PROD001", 2, 100, 0)).ok_or("commit")?;

        let update = LineUpdate::NegotiatedDiscount(true);
        assert!(!update.affects_total());
        assert!(lines.update(id, update));

        assert_eq!(lines.total()?, Decimal::from(200));

        Ok(())
    }

    #[test]
    fn remove_leaves_other_lines_intact() -> TestResult {
        let mut lines = OrderLines::default();
        let a = lines.commit(&mut draft("PROD001", 2, 100, 0)).ok_or("commit")?;
        let b = lines.commit(&mut draft("PROD002", 1, 50, 10)).ok_or("commit")?;
        let c = lines.commit(&mut draft("PROD003", 1, 380, 0)).ok_or("commit")?;

        let before: Vec<_> = lines.iter().filter(|l| l.id() != b).cloned().collect();

        assert!(lines.remove(b));
        assert!(!lines.remove(b));

        let after: Vec<_> = lines.iter().cloned().collect();
        assert_eq!(after, before);
        assert_eq!(after.iter().map(OrderLine::id).collect::<Vec<_>>(), [a, c]);

        Ok(())
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut lines = OrderLines::default();

        assert!(!lines.update(LineId::new(), LineUpdate::Quantity(2)));
        assert!(!lines.remove(LineId::new()));
    }

    #[test]
    fn select_seeds_price_from_country() -> TestResult {
        let catalog = crate::catalog::Catalog::with_products([product(
            "PROD001",
            "Producto Premium A",
            &[("Venezuela", 150), ("Colombia", 180)],
        )])?;
        let mut draft = LineDraft::default();

        assert!(draft.select(&catalog, "PROD001", "Colombia"));
        assert_eq!(draft.unit_price(), Decimal::from(180));
        assert_eq!(draft.selected().map(|s| s.description.as_str()), Some("Producto Premium A"));

        assert!(draft.select(&catalog, "PROD001", "El Salvador"));
        assert_eq!(draft.unit_price(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn select_ignores_unknown_product_or_missing_country() -> TestResult {
        let catalog = crate::catalog::Catalog::with_products([product(
            "PROD001",
            "Producto Premium A",
            &[("Venezuela", 150)],
        )])?;
        let mut draft = LineDraft::default();
        draft.select(&catalog, "PROD001", "Venezuela");

        assert!(!draft.select(&catalog, "PROD999", "Venezuela"));
        assert!(!draft.select(&catalog, "PROD001", ""));
        assert_eq!(draft.selected().map(|s| s.code.as_str()), Some("PROD001"));
        assert_eq!(draft.unit_price(), Decimal::from(150));

        Ok(())
    }
}
