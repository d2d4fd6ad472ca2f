use crate::parser::cursor::{LineCursor, LEADING_UNITS, TRAILING_UNITS};
use crate::parser::error::ParseError;
use crate::parser::models::ShoppingListItem;
use crate::unit::CountType;

/// Parse one shopping list line.
///
/// Three shapes are understood:
///
/// ```text
/// 2 lb. Chicken Breasts, $4.99/lb.    weight priced
/// Corn Chex, $2.79                    quantity priced
/// 10 Sweet Corn, 5/$2.00              quantity priced in bulk
/// ```
///
/// The price and its unit are peeled off the end of the line first, then
/// the count and its unit off the front. Whatever is left is the name.
pub fn parse_line(line: &str) -> Result<ShoppingListItem, ParseError> {
    let mut cursor = LineCursor::new(line);

    cursor.strip_suffix_char('.');

    let explicit_per_unit = cursor.strip_suffix_unit(&TRAILING_UNITS);
    let mut per_unit_count_type = explicit_per_unit.unwrap_or(CountType::Quantity);

    cursor.strip_suffix_char(' ');

    let mut per_unit_count = 1;

    // "$4.99/lb" or "$12.00/5lb"
    if explicit_per_unit.is_some() {
        if let Some(count) = cursor.take_trailing_int()? {
            per_unit_count = count;
        }

        if !cursor.strip_suffix_char('/') {
            return Err(ParseError::ExpectedSlashBeforePrice);
        }
    }

    let price = cursor.take_trailing_decimal().map_err(|e| match e {
        e @ ParseError::NumericConversionFailed(_) => e,
        _ => ParseError::ExpectedPriceNumber,
    })?;
    let price_cents_per_unit = price.literal_cents().ok_or_else(|| {
        ParseError::NumericConversionFailed(format!("{}.{}", price.whole, price.fractional))
    })?;

    if !cursor.strip_suffix_char('$') {
        return Err(ParseError::ExpectedDollarSign);
    }

    // "5/$2.00"
    if explicit_per_unit.is_none() && cursor.strip_suffix_char('/') {
        per_unit_count = cursor
            .take_trailing_int()?
            .ok_or(ParseError::ExpectedUnitCount)?;
        per_unit_count_type = CountType::Quantity;
    }

    if per_unit_count < 1 {
        return Err(ParseError::ExpectedUnitCount);
    }

    cursor.strip_suffix_char(' ');

    if !cursor.strip_suffix_char(',') {
        return Err(ParseError::ExpectedComma);
    }

    // Weight-priced items must say how much is being bought; anything
    // counted by quantity defaults to a single item.
    let expects_quantity = per_unit_count_type.is_quantity() || per_unit_count != 1;
    let count = if expects_quantity {
        cursor.take_leading_decimal().unwrap_or(1.0)
    } else {
        cursor.take_leading_decimal()?
    };

    cursor.strip_prefix_char(' ');

    let count_type = match cursor.strip_prefix_unit(&LEADING_UNITS) {
        Some(count_type) => count_type,
        None if count.fract() == 0.0 => CountType::Quantity,
        None => return Err(ParseError::ExpectedUnitAfterQuantity),
    };

    if !count_type.is_quantity() {
        cursor.strip_prefix_char('.');

        if !cursor.strip_prefix_char(' ') {
            return Err(ParseError::ExpectedSpaceAfterUnit);
        }
    }

    let name = cursor.rest();
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }

    Ok(ShoppingListItem {
        name: name.to_string(),
        price_cents_per_unit,
        count,
        count_type,
        per_unit_count,
        per_unit_count_type,
    })
}
