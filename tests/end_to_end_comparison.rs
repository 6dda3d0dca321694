// Integration test for a full comparison of a daily commuter
use fare_advisor::models::{
    AgeBracket, CalculationRequest, OptionDetail, OptionKind, Route, TravelcardPricing,
    TravelerProfile,
};
use fare_advisor::{FareCalculator, FareSolver};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_commuter_picks_unlimited_travelcard() {
    // Adult, second class, new customer, 5 trips a week at 89 all year
    let request = CalculationRequest::with_routes(
        TravelerProfile::new(AgeBracket::Adult),
        vec![Route::new("Zurich HB - Bern", 5.0, 89.0)],
    );

    let calculator = FareCalculator::default();
    let result = calculator.calculate(&request).expect("valid request");

    println!("Baseline: {:.2}", result.annual_baseline_spend);
    println!("Half-fare tickets: {:.2}", result.half_fare_ticket_spend);
    for option in &result.options {
        println!("  {:<22} {:>10.2}", option.kind.to_string(), option.total);
    }

    assert_close(result.annual_baseline_spend, 23140.0);
    assert_close(result.half_fare_ticket_spend, 11570.0);

    let best = result.best_option().unwrap();
    assert_eq!(best.kind, OptionKind::UnlimitedTravelcard);
    assert_eq!(best.total, 3995.0);
    match &best.detail {
        OptionDetail::UnlimitedTravelcard { pricing, .. } => {
            assert_eq!(*pricing, TravelcardPricing::Annual)
        }
        other => panic!("unexpected detail {:?}", other),
    }

    // every half-fare-plus tier is more expensive than the travelcard
    for option in result.options_of(OptionKind::HalfFarePlus) {
        assert!(option.total > best.total);
    }

    // half-fare option: tickets plus the new-customer card price
    let half_fare = result.options_of(OptionKind::HalfFare).next().unwrap();
    assert_close(half_fare.total, 11760.0);

    // 89 per trip is outside the season-pass estimate range
    assert_eq!(result.season_passes.len(), 1);
    assert!(!result.season_passes[0].in_range);
    assert!(result.worthwhile_season_passes().is_empty());
}

#[test]
fn test_smallest_half_fare_plus_tier_pricing() {
    let request = CalculationRequest::with_routes(
        TravelerProfile::new(AgeBracket::Adult),
        vec![Route::new("Zurich HB - Bern", 5.0, 89.0)],
    );
    let result = FareCalculator::default().calculate(&request).unwrap();

    // 11570 in tickets against 1000 credit: 11 reloads, the last 57% used
    let first_tier = result.options_of(OptionKind::HalfFarePlus).next().unwrap();
    let reload = first_tier.reload().unwrap();
    assert_eq!(reload.reload_count, 11);
    assert!((reload.last_reload_ratio - 0.57).abs() < 1e-6);
    assert_close(reload.reload_cost, 8456.0);
    assert_close(first_tier.total, 800.0 + 190.0 + 8456.0);
}

#[test]
fn test_occasional_traveler_keeps_half_fare() {
    // two trips a month
    let request = CalculationRequest::with_routes(
        TravelerProfile::new(AgeBracket::Senior),
        vec![Route::new("Basel - Liestal", 2.0, 30.0)
            .with_frequency(fare_advisor::models::FrequencyUnit::Monthly)],
    );
    let result = FareCalculator::default().calculate(&request).unwrap();

    // baseline 720, half-fare 360 + 190, smallest credit package 800 + 190
    assert_close(result.annual_baseline_spend, 720.0);
    assert_eq!(result.best_option().unwrap().kind, OptionKind::HalfFare);
    assert_close(result.best_option().unwrap().total, 550.0);
    assert_close(result.best_saving().unwrap(), 170.0);
}

#[test]
fn test_direct_mode_extracted_total() {
    // an annual total taken from purchase receipts, already at half fare
    let mut request = CalculationRequest::direct(TravelerProfile::new(AgeBracket::Adult), 1800.0);
    if let fare_advisor::models::TravelPattern::Direct {
        half_fare_discounted,
        ..
    } = &mut request.pattern
    {
        *half_fare_discounted = true;
    }
    let result = FareCalculator::default().calculate(&request).unwrap();

    assert_close(result.annual_baseline_spend, 3600.0);
    assert_close(result.half_fare_ticket_spend, 1800.0);
    assert!(result.season_passes.is_empty());

    // 1000 credit plus a reload used at 80% beats the 2000 tier:
    // 800 + 190 + 640 against 1500 + 190
    let best = result.best_option().unwrap();
    assert_eq!(best.kind, OptionKind::HalfFarePlus);
    assert_close(best.total, 1630.0);
    assert_eq!(best.package().map(|p| p.credit), Some(1000.0));
    assert_eq!(best.reload().map(|r| r.reload_count), Some(1));
}
