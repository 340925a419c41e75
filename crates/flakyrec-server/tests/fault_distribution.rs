//! Statistical check of the six-way lookup branch with the real RNG.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Instant;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use flakyrec_server::app_state::AppState;
use flakyrec_server::config;
use flakyrec_server::router::build_router;

const TRIALS: usize = 1200;

#[tokio::test]
async fn seed_lookups_split_into_ok_slow_and_fault() {
    let cfg = config::load_from_str("version: 1\nstore:\n  slow_delay_ms: 5\n").unwrap();
    let delay = cfg.store.slow_delay();
    let app = build_router(AppState::new(&cfg));

    let (mut ok, mut slow, mut fault, mut missing) = (0usize, 0usize, 0usize, 0usize);
    for i in 0..TRIALS {
        let id = ["1", "2", "3"][i % 3];
        let started = Instant::now();
        let resp = app
            .clone()
            .oneshot(Request::get(format!("/records/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let elapsed = started.elapsed();

        match resp.status() {
            StatusCode::OK => {
                ok += 1;
                if elapsed >= delay {
                    slow += 1;
                }
            }
            StatusCode::INTERNAL_SERVER_ERROR => fault += 1,
            StatusCode::NOT_FOUND => missing += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    // expected: 1000 ok (200 of them slow), 200 faults, never 404
    assert_eq!(missing, 0);
    assert!((100..=300).contains(&fault), "fault={fault}");
    assert!((850..=1100).contains(&ok), "ok={ok}");
    assert!(slow >= 100, "slow={slow}");
    assert!(slow <= 400, "slow={slow}");
}
