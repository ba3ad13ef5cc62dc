//! End-to-end workflow tests against a mocked ledger service.

use ledger_converter::{
    BalanceOutcome, ConvertOutcome, ConverterConfigBuilder, ConverterError, RequestCoordinator,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPLORER: &str = "https://explorer.test/transaction/";

fn coordinator_for(
    mock_server: &MockServer,
) -> RequestCoordinator<ledger_converter::HttpLedgerService> {
    let config = ConverterConfigBuilder::new()
        .with_service_url(mock_server.uri())
        .with_explorer_url(EXPLORER)
        .build()
        .unwrap();
    RequestCoordinator::with_http(config).unwrap()
}

async fn mock_balance(mock_server: &MockServer, balance_d8: u64) {
    Mock::given(method("POST"))
        .and(path("/get_account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Ok": { "new_total_balance_d8": balance_d8 }
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_query_then_convert_happy_path() {
    let mock_server = MockServer::start().await;
    mock_balance(&mock_server, 850_000_000).await;
    Mock::given(method("POST"))
        .and(path("/convert_account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Ok": "12345" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);

    let balance = coordinator.query_balance("acc-1", "1,2,3").await.unwrap();
    assert_eq!(
        balance,
        BalanceOutcome::Balance {
            raw: 850_000_000,
            display: "8.5 SNEED".to_string(),
        }
    );
    assert!(coordinator.conversion_enabled());

    let outcome = coordinator.convert("acc-1", "1,2,3").await.unwrap();
    assert_eq!(
        outcome,
        ConvertOutcome::Converted {
            tx_id: "12345".to_string(),
            explorer_url: format!("{EXPLORER}12345"),
        }
    );

    let view = coordinator.view();
    assert_eq!(view.balance_region.as_deref(), Some("8.5 SNEED"));
    assert_eq!(
        view.result_region.as_deref(),
        Some("Converted in transaction: 12345 (https://explorer.test/transaction/12345)")
    );
    assert!(!view.convert_enabled);
    assert!(!view.balance_busy);
    assert!(!view.convert_busy);
}

#[tokio::test]
async fn test_zero_balance_keeps_conversion_gated() {
    let mock_server = MockServer::start().await;
    mock_balance(&mock_server, 0).await;

    let coordinator = coordinator_for(&mock_server);

    let balance = coordinator.query_balance("acc-1", "").await.unwrap();
    assert_eq!(
        balance,
        BalanceOutcome::Balance {
            raw: 0,
            display: "0 SNEED".to_string(),
        }
    );

    let result = coordinator.convert("acc-1", "").await;
    assert!(matches!(result, Err(ConverterError::ConversionNotEnabled)));
}

#[tokio::test]
async fn test_malformed_subaccount_never_reaches_the_service() {
    let mock_server = MockServer::start().await;
    // No mocks mounted: any request would 404 and the expect(0) guard below
    // would flag it.
    Mock::given(method("POST"))
        .and(path("/get_account"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);
    let result = coordinator.query_balance("acc-1", "1,999").await;

    assert!(matches!(
        result,
        Err(ConverterError::SubaccountValueOutOfRange(999))
    ));
}

#[tokio::test]
async fn test_cooldown_shows_fixed_guidance() {
    let mock_server = MockServer::start().await;
    mock_balance(&mock_server, 100).await;
    Mock::given(method("POST"))
        .and(path("/convert_account"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "Err": { "OnCooldown": {} } })),
        )
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);
    coordinator.query_balance("acc-1", "").await.unwrap();
    let outcome = coordinator.convert("acc-1", "").await.unwrap();

    assert_eq!(outcome, ConvertOutcome::OnCooldown);
    assert_eq!(
        coordinator.view().result_region.as_deref(),
        Some("This function is on cooldown, please return in an hour.")
    );
}

#[tokio::test]
async fn test_stale_indexer_shows_fixed_guidance() {
    let mock_server = MockServer::start().await;
    mock_balance(&mock_server, 100).await;
    Mock::given(method("POST"))
        .and(path("/convert_account"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "Err": { "StaleIndexer": {} } })),
        )
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);
    coordinator.query_balance("acc-1", "").await.unwrap();
    let outcome = coordinator.convert("acc-1", "").await.unwrap();

    assert_eq!(outcome, ConvertOutcome::StaleIndexer);
    assert_eq!(
        coordinator.view().result_region.as_deref(),
        Some("The transaction indexer is not up to date. Please try again in a while.")
    );
}

#[tokio::test]
async fn test_unknown_rejection_renders_big_integers_exactly() {
    let mock_server = MockServer::start().await;
    mock_balance(&mock_server, 100).await;
    Mock::given(method("POST"))
        .and(path("/convert_account"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"Err":{"LedgerFault":{"bigValue":123456789012345678901234567890}}}"#,
        ))
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);
    coordinator.query_balance("acc-1", "").await.unwrap();
    let outcome = coordinator.convert("acc-1", "").await.unwrap();

    match outcome {
        ConvertOutcome::Unknown { rendering } => {
            assert!(rendering.contains("123456789012345678901234567890"));
            assert!(rendering.contains("LedgerFault"));
        }
        other => panic!("expected unknown outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_balance_rejection_renders_the_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_account"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Err": { "AccountNotFound": {} } })),
        )
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);
    let outcome = coordinator.query_balance("acc-1", "").await.unwrap();

    match outcome {
        BalanceOutcome::Failed { rendering } => assert!(rendering.contains("AccountNotFound")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!coordinator.conversion_enabled());
}

#[tokio::test]
async fn test_service_outage_is_rendered_generically() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_account"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let coordinator = coordinator_for(&mock_server);
    let outcome = coordinator.query_balance("acc-1", "").await.unwrap();

    match outcome {
        BalanceOutcome::Failed { rendering } => assert!(rendering.contains("503")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!coordinator.view().balance_busy);
}
