use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use async_trait::async_trait;

use super::*;

const TOKYO: Coordinates = Coordinates {
    latitude: 35.6895,
    longitude: 139.6917,
};
const LONDON: Coordinates = Coordinates {
    latitude: 51.5074,
    longitude: -0.1278,
};

type Answer = Result<Option<Coordinates>, TimezoneError>;

/// Geocoder that replays scripted answers and counts calls.
///
/// Once the script runs out it keeps returning the last answer.
struct StubGeocoder {
    answers: Mutex<VecDeque<Answer>>,
    last: Answer,
    calls: Mutex<Vec<String>>,
}

impl StubGeocoder {
    fn new(answers: Vec<Answer>) -> Arc<Self> {
        let last = answers.last().cloned().unwrap_or(Ok(None));
        Arc::new(Self {
            answers: Mutex::new(answers.into()),
            last,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn always(answer: Answer) -> Arc<Self> {
        Self::new(vec![answer])
    }

    fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn search(&self, query: &str) -> Answer {
        self.calls.lock().unwrap().push(query.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone())
    }
}

fn finder() -> Arc<DefaultFinder> {
    static FINDER: OnceLock<Arc<DefaultFinder>> = OnceLock::new();
    FINDER.get_or_init(|| Arc::new(DefaultFinder::new())).clone()
}

fn resolver(geocoder: Arc<StubGeocoder>, max_retries: u32) -> TimezoneResolver {
    TimezoneResolver::new(
        geocoder,
        finder(),
        TimezoneCache::new(Duration::from_secs(60)),
        RetryPolicy {
            max_retries,
            backoff: Duration::ZERO,
        },
    )
}

fn transport() -> TimezoneError {
    TimezoneError::Transport("connection reset".to_string())
}

#[tokio::test]
async fn resolves_city_to_timezone() {
    let geocoder = StubGeocoder::always(Ok(Some(TOKYO)));
    let resolver = resolver(geocoder.clone(), 0);

    let timezone = resolver.resolve("Tokyo").await.unwrap();

    assert_eq!(timezone.as_str(), "Asia/Tokyo");
    assert_eq!(geocoder.calls(), 1);
}

#[tokio::test]
async fn resolves_western_longitudes() {
    let resolver = resolver(StubGeocoder::always(Ok(Some(LONDON))), 0);

    let timezone = resolver.resolve("London").await.unwrap();

    assert_eq!(timezone.as_str(), "Europe/London");
}

#[tokio::test]
async fn empty_geocoding_result_is_city_not_found() {
    let resolver = resolver(StubGeocoder::always(Ok(None)), 2);

    let result = resolver.resolve("Atlantis").await;

    assert_eq!(
        result,
        Err(TimezoneError::CityNotFound("Atlantis".to_string()))
    );
}

#[tokio::test]
async fn blank_city_is_rejected_without_a_request() {
    let geocoder = StubGeocoder::always(Ok(Some(TOKYO)));
    let resolver = resolver(geocoder.clone(), 0);

    let result = resolver.resolve("   ").await;

    assert!(matches!(result, Err(TimezoneError::CityNotFound(_))));
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test]
async fn retries_transient_failures() {
    let geocoder = StubGeocoder::new(vec![Err(transport()), Ok(Some(TOKYO))]);
    let resolver = resolver(geocoder.clone(), 2);

    let timezone = resolver.resolve("Tokyo").await.unwrap();

    assert_eq!(timezone.as_str(), "Asia/Tokyo");
    assert_eq!(geocoder.calls(), 2);
}

#[tokio::test]
async fn gives_up_after_max_retries() {
    let geocoder = StubGeocoder::always(Err(transport()));
    let resolver = resolver(geocoder.clone(), 2);

    let result = resolver.resolve("Tokyo").await;

    assert_eq!(result, Err(transport()));
    assert_eq!(geocoder.calls(), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let error = TimezoneError::Status {
        status: 403,
        message: "forbidden".to_string(),
    };
    let geocoder = StubGeocoder::always(Err(error.clone()));
    let resolver = resolver(geocoder.clone(), 2);

    let result = resolver.resolve("Tokyo").await;

    assert_eq!(result, Err(error));
    assert_eq!(geocoder.calls(), 1);
}

#[tokio::test]
async fn repeated_lookup_is_served_from_cache() {
    let geocoder = StubGeocoder::always(Ok(Some(TOKYO)));
    let resolver = resolver(geocoder.clone(), 0);

    resolver.resolve("Tokyo").await.unwrap();
    let timezone = resolver.resolve(" tokyo ").await.unwrap();

    assert_eq!(timezone.as_str(), "Asia/Tokyo");
    assert_eq!(geocoder.calls(), 1);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let geocoder = StubGeocoder::new(vec![Ok(None), Ok(Some(TOKYO))]);
    let resolver = resolver(geocoder.clone(), 0);

    assert!(resolver.resolve("Tokyo").await.is_err());
    assert!(resolver.resolve("Tokyo").await.is_ok());
    assert_eq!(geocoder.calls(), 2);
}
