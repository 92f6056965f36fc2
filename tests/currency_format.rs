use coin_board_wasm::formatting::{
    Currency, CurrencyFormatter, Locale, convert_to_currency, format_currency,
};

#[test]
fn default_is_us_dollars() {
    assert_eq!(convert_to_currency(0.0), "$0.00");
    assert_eq!(convert_to_currency(23_415.5), "$23,415.50");
    assert_eq!(convert_to_currency(1_234_567.891), "$1,234,567.89");
    assert_eq!(convert_to_currency(-42.1), "-$42.10");
}

#[test]
fn locale_controls_separators_and_symbol_position() {
    let german = CurrencyFormatter::new(Locale::DeDe, Currency::EUR);
    assert_eq!(german.format(1_234.56), "1.234,56 €");
    assert_eq!(german.format(-0.5), "-0,50 €");

    let french = CurrencyFormatter::new(Locale::FrFr, Currency::EUR);
    assert_eq!(french.format(1_234.56), "1\u{202F}234,56\u{a0}€");

    let british = CurrencyFormatter::new(Locale::EnGb, Currency::GBP);
    assert_eq!(british.format(999.999), "£1,000.00");
}

#[test]
fn yen_has_no_fraction_digits() {
    let yen = CurrencyFormatter::new(Locale::JaJp, Currency::JPY);
    assert_eq!(yen.format(3_456_789.4), "¥3,456,789");
}

#[test]
fn failures_degrade_to_empty_string() {
    assert_eq!(format_currency(10.0, "xx_XX", "USD"), "");
    assert_eq!(format_currency(10.0, "en_US", "DOGE"), "");
    assert_eq!(convert_to_currency(f64::NAN), "");
    assert_eq!(convert_to_currency(f64::INFINITY), "");
}

#[test]
fn codes_resolve_to_formatter() {
    assert_eq!(format_currency(5.0, "de-DE", "eur"), "5,00 €");
    assert!(CurrencyFormatter::from_codes("pt_BR", "BRL").is_err());
}

#[test]
fn change_label_carries_sign() {
    let us = CurrencyFormatter::default();
    assert_eq!(us.format_change(2.345_6), "+2.35");
    assert_eq!(us.format_change(-1.2), "-1.20");
    assert_eq!(us.format_change(0.0), "0.00");
    assert_eq!(us.format_change(f64::NAN), "");

    let german = CurrencyFormatter::new(Locale::DeDe, Currency::EUR);
    assert_eq!(german.format_change(3.5), "+3,50");
}
