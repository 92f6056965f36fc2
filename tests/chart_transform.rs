use coin_board_wasm::domain::chart::{ChartTransform, MID_LINE, PriceTrend};
use coin_board_wasm::domain::market_data::{Coin, CoinId, PercentChange, Price, Symbol};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const EPS: f64 = 1e-3;

fn xs(prices: &[f64]) -> Vec<f64> {
    ChartTransform::new().transform(prices, PriceTrend::Loss).points.iter().map(|p| p.x).collect()
}

fn ys(prices: &[f64]) -> Vec<f64> {
    ChartTransform::new().transform(prices, PriceTrend::Loss).points.iter().map(|p| p.y).collect()
}

#[test]
fn worked_example_matches_expected_geometry() {
    let prices = [100.0, 105.0, 95.0, 110.0];
    let expected_x = [0.0, 0.333, 0.667, 1.0];
    let expected_y = [0.667, 0.333, 1.0, 0.0];

    for (got, want) in xs(&prices).iter().zip(expected_x) {
        assert!((got - want).abs() < EPS, "x {} != {}", got, want);
    }
    for (got, want) in ys(&prices).iter().zip(expected_y) {
        assert!((got - want).abs() < EPS, "y {} != {}", got, want);
    }
}

#[test]
fn empty_series_gives_empty_geometry() {
    let geometry = ChartTransform::new().transform(&[], PriceTrend::Gain);
    assert!(geometry.is_empty());
    assert_eq!(geometry.trend, PriceTrend::Gain);
}

#[test]
fn flat_series_sits_on_mid_line() {
    assert_eq!(ys(&[7.5, 7.5, 7.5]), vec![MID_LINE; 3]);
}

#[test]
fn highest_price_is_at_top() {
    let ys = ys(&[1.0, 9.0, 5.0]);
    assert_eq!(ys[1], 0.0);
    assert_eq!(ys[0], 1.0);
}

#[test]
fn coin_trend_follows_change_percent_not_series() {
    let falling_series_but_positive_change =
        Coin::new(CoinId::from("bitcoin"), Symbol::from("btc"), "Bitcoin", Price::from(90.0))
            .with_change(PercentChange::from(1.5))
            .with_history(vec![100.0, 90.0]);
    let transform = ChartTransform::new();

    assert_eq!(transform.transform_coin(&falling_series_but_positive_change).trend, PriceTrend::Gain);
    assert_eq!(
        transform.transform_series(&falling_series_but_positive_change.price_history).trend,
        PriceTrend::Loss
    );
}

#[test]
fn unit_geometry_snapshot() {
    let geometry = ChartTransform::new().transform(&[100.0, 150.0, 125.0, 200.0, 100.0], PriceTrend::Gain);
    let points: Vec<(f64, f64)> = geometry.points.iter().map(|p| (p.x, p.y)).collect();

    insta::assert_debug_snapshot!(points, @r###"
    [
        (
            0.0,
            1.0,
        ),
        (
            0.25,
            0.5,
        ),
        (
            0.5,
            0.75,
        ),
        (
            0.75,
            0.0,
        ),
        (
            1.0,
            1.0,
        ),
    ]
    "###);
}

#[quickcheck]
fn one_point_per_price_spanning_unit_width(prices: Vec<f64>) -> TestResult {
    if prices.is_empty() {
        return TestResult::discard();
    }
    let xs = xs(&prices);
    let monotonic = xs.windows(2).all(|w| w[0] <= w[1]);
    let spans = xs[0] == 0.0 && (prices.len() == 1 || *xs.last().unwrap() == 1.0);
    TestResult::from_bool(xs.len() == prices.len() && monotonic && spans)
}

#[quickcheck]
fn y_stays_inside_unit_height(prices: Vec<f64>) -> bool {
    ys(&prices).iter().all(|y| (0.0..=1.0).contains(y))
}

#[quickcheck]
fn flat_series_is_always_mid_line(value: f64, len: u8) -> TestResult {
    if !value.is_finite() || len == 0 {
        return TestResult::discard();
    }
    let prices = vec![value; len as usize];
    TestResult::from_bool(ys(&prices).iter().all(|y| *y == MID_LINE))
}

#[quickcheck]
fn transform_is_idempotent(prices: Vec<f64>) -> bool {
    let transform = ChartTransform::new();
    let a = transform.transform_series(&prices);
    let b = transform.transform_series(&prices);
    // NaN never equals itself, so compare bit patterns
    a.trend == b.trend
        && a.points.len() == b.points.len()
        && a.points.iter().zip(&b.points).all(|(p, q)| {
            p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits()
        })
}
