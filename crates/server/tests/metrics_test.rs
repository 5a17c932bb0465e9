// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use version_rest_api::metrics;

#[test]
fn test_metrics_initialization() {
    // Initialize metrics with test prefix
    metrics::init("test");

    // Gather metrics - should not panic
    let result = metrics::gather_metrics();
    assert!(result.is_ok());

    let metrics_text = result.unwrap();
    assert!(!metrics_text.is_empty());

    // Counters always appear even with zero values
    assert!(
        metrics_text.contains("test_http_requests"),
        "Should contain test_http_requests"
    );
    assert!(
        metrics_text.contains("test_http_request_success"),
        "Should contain test_http_request_success"
    );
    assert!(
        metrics_text.contains("test_http_request_error"),
        "Should contain test_http_request_error"
    );
    assert!(
        metrics_text.contains("test_download_redirects"),
        "Should contain test_download_redirects"
    );
    assert!(
        metrics_text.contains("test_download_not_found"),
        "Should contain test_download_not_found"
    );

    // Note: Histograms won't appear until data is recorded
}

#[test]
fn test_http_metrics_increment() {
    use version_rest_api::metrics::registry::{
        DOWNLOAD_NOT_FOUND, DOWNLOAD_REDIRECTS, HTTP_REQUESTS,
    };

    metrics::init("test");

    let initial_total = HTTP_REQUESTS.get();
    let initial_redirects = DOWNLOAD_REDIRECTS.get();
    let initial_missed = DOWNLOAD_NOT_FOUND.get();

    HTTP_REQUESTS.inc();
    DOWNLOAD_REDIRECTS.inc();
    DOWNLOAD_NOT_FOUND.inc();

    assert_eq!(HTTP_REQUESTS.get(), initial_total + 1.0);
    assert_eq!(DOWNLOAD_REDIRECTS.get(), initial_redirects + 1.0);
    assert_eq!(DOWNLOAD_NOT_FOUND.get(), initial_missed + 1.0);
}

#[test]
fn test_histogram_metrics() {
    use version_rest_api::metrics::registry::REQUEST_DURATION_SECONDS;

    metrics::init("test");

    REQUEST_DURATION_SECONDS
        .with_label_values(&["GET", "/version", "200"])
        .observe(0.5);

    let metrics_text = metrics::gather_metrics().unwrap();

    assert!(metrics_text.contains("test_request_duration_seconds"));
    assert!(metrics_text.contains("bucket"));
}
