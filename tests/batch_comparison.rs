// Integration test for parallel batch comparisons
use fare_advisor::models::{AgeBracket, CalculationRequest, Route, TravelerProfile};
use fare_advisor::{FareCalculator, FareError, FareSolver};
use std::time::Instant;

fn create_requests() -> Vec<CalculationRequest> {
    let mut requests = Vec::new();
    for i in 0..48 {
        let bracket = AgeBracket::ALL[i % AgeBracket::ALL.len()];
        let trips = 1.0 + (i % 7) as f64;
        let cost = 6.0 + (i * 3 % 70) as f64;
        requests.push(CalculationRequest::with_routes(
            TravelerProfile::new(bracket),
            vec![Route::new(format!("Route {}", i), trips, cost)],
        ));
    }
    requests
}

#[test]
fn test_batch_matches_sequential() {
    let calculator = FareCalculator::default();
    let requests = create_requests();

    let start_time = Instant::now();
    let batch = calculator.calculate_batch(&requests);
    println!("Batch of {} took {:?}", requests.len(), start_time.elapsed());

    assert_eq!(batch.len(), requests.len());
    for (request, result) in requests.iter().zip(&batch) {
        let sequential = calculator.calculate(request).unwrap();
        let parallel = result.as_ref().unwrap();
        assert_eq!(*parallel, sequential);
    }
}

#[test]
fn test_batch_errors_stay_with_their_request() {
    let calculator = FareCalculator::default();
    let mut requests = create_requests();
    requests[5] = CalculationRequest::with_routes(
        TravelerProfile::new(AgeBracket::Adult),
        vec![Route::new("broken", -2.0, 10.0)],
    );

    let batch = calculator.calculate_batch(&requests);
    for (i, result) in batch.iter().enumerate() {
        if i == 5 {
            assert!(matches!(result, Err(FareError::InvalidInputError(_))));
        } else {
            assert!(result.is_ok(), "request {} failed: {:?}", i, result);
        }
    }
}
