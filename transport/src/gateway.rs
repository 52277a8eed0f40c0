//! Contract queries over the MultiversX HTTP API.
//!
//! A view call is a POST of `{scAddress, funcName, args}` to
//! `vm-values/query`. The API nests the result under `data.data`, while
//! gateways and proxies in front of it have been seen returning `data`
//! or the bare object, so all three shapes are accepted.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use thub_core::address::Address;
use thub_core::codec::encode_top_u64;
use thub_core::decoder;
use thub_core::error::Result;
use thub_core::transport::HubQueryT;
use thub_core::types::{GameConfigRecord, GameIndex, TournamentId, TournamentRecord, UserStatsRecord};

use crate::constants::*;
use crate::error::{TransportError, TransportResult};

const RESULT_PARENTS: [&str; 3] = ["/data/data", "/data", ""];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VmQueryRequest {
    pub sc_address: String,
    pub func_name: String,
    pub args: Vec<String>,
}

/// Pull the base64 `returnData[0]` out of a query response.
pub fn extract_return_data(body: &Value) -> TransportResult<String> {
    let result = RESULT_PARENTS
        .iter()
        .filter_map(|p| body.pointer(p))
        .find(|v| v.get("returnData").is_some())
        .ok_or(TransportError::ReturnDataNotFound)?;

    if let Some(code) = result.get("returnCode").and_then(Value::as_str) {
        if code != RETURN_CODE_OK {
            let message = result
                .get("returnMessage")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(TransportError::QueryFailed {
                code: code.to_owned(),
                message: message.to_owned(),
            });
        }
    }

    result
        .get("returnData")
        .and_then(Value::as_array)
        .and_then(|data| data.first())
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(TransportError::ReturnDataNotFound)
}

/// Base64 return data to the hex form the decoder reads.
pub fn return_data_to_hex(b64: &str) -> TransportResult<String> {
    let bytes = general_purpose::STANDARD.decode(b64)?;
    Ok(hex::encode(bytes))
}

pub struct GatewayTransport {
    client: reqwest::Client,
    api: String,
    contract: Address,
    timeout: Option<Duration>,
}

impl GatewayTransport {
    pub fn try_new(api: &str, contract: &str, timeout: Option<Duration>) -> TransportResult<Self> {
        let contract = Address::from_bech32(contract)
            .map_err(|e| TransportError::InvalidContractAddress(e.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            api: api.trim_end_matches('/').to_owned(),
            contract,
            timeout,
        })
    }

    pub fn contract(&self) -> &Address {
        &self.contract
    }

    fn make_endpoint(&self) -> String {
        format!("{}/{}", self.api, VM_QUERY_PATH)
    }

    fn make_request(&self, func: &str, args: Vec<String>) -> VmQueryRequest {
        VmQueryRequest {
            sc_address: self.contract.to_bech32(),
            func_name: func.to_owned(),
            args,
        }
    }

    /// Call a view function and return `returnData[0]` as hex.
    pub async fn query(&self, func: &str, args: Vec<String>) -> TransportResult<String> {
        let req = self.make_request(func, args);
        debug!("Query {} with args {:?}", func, req.args);
        let mut builder = self.client.post(self.make_endpoint()).json(&req);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::StatusCodeNotOk(status.as_u16()));
        }
        let body: Value = resp.json().await?;
        let b64 = extract_return_data(&body)?;
        return_data_to_hex(&b64)
    }

    /// Like `query`, but any transport failure is logged and reads as absent.
    async fn query_optional(&self, func: &str, args: Vec<String>) -> Option<String> {
        match self.query(func, args).await {
            Ok(hex) => Some(hex),
            Err(e) => {
                warn!("Query {} returned nothing: {}", func, e);
                None
            }
        }
    }
}

#[async_trait]
impl HubQueryT for GatewayTransport {
    async fn get_tournament(&self, id: TournamentId) -> Result<Option<TournamentRecord>> {
        match self.query_optional(GET_TOURNAMENT, vec![encode_top_u64(id)]).await {
            Some(hex) => Ok(Some(decoder::decode_tournament(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_game_config(&self, index: GameIndex) -> Result<Option<GameConfigRecord>> {
        match self.query_optional(GET_GAME_CONFIG, vec![encode_top_u64(index)]).await {
            Some(hex) => Ok(Some(decoder::decode_game_config(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_user_stats(&self, addr: &Address) -> Result<Option<UserStatsRecord>> {
        match self.query_optional(GET_USER_STATS, vec![addr.to_hex()]).await {
            Some(hex) => Ok(Some(decoder::decode_user_stats(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_number_of_tournaments(&self) -> Result<Option<u64>> {
        match self.query_optional(GET_NUMBER_OF_TOURNAMENTS, vec![]).await {
            Some(hex) => Ok(Some(decoder::decode_top_u64(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_number_of_games(&self) -> Result<Option<u64>> {
        match self.query_optional(GET_NUMBER_OF_GAMES, vec![]).await {
            Some(hex) => Ok(Some(decoder::decode_top_u64(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_active_tournament_ids(&self) -> Result<Option<Vec<TournamentId>>> {
        match self.query_optional(GET_ACTIVE_TOURNAMENT_IDS, vec![]).await {
            Some(hex) => Ok(Some(decoder::decode_u64_list(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_tournament_fee(&self) -> Result<Option<u128>> {
        match self.query_optional(GET_TOURNAMENT_FEE, vec![]).await {
            Some(hex) => Ok(Some(decoder::decode_top_biguint(&hex)?)),
            None => Ok(None),
        }
    }

    async fn get_house_fee_percentage(&self) -> Result<Option<u32>> {
        match self.query_optional(GET_HOUSE_FEE_PERCENTAGE, vec![]).await {
            Some(hex) => Ok(Some(decoder::decode_top_u32(&hex)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use thub_test::prelude::*;

    fn transport(api: &str) -> GatewayTransport {
        GatewayTransport::try_new(api, TEST_CONTRACT_ADDR, Some(Duration::from_secs(5))).unwrap()
    }

    fn ok_body(b64: &str) -> Value {
        json!({
            "data": { "data": { "returnData": [b64], "returnCode": "ok" } },
            "code": "successful"
        })
    }

    #[test]
    fn test_extract_nested_twice() -> anyhow::Result<()> {
        assert_eq!(extract_return_data(&ok_body("AQ=="))?, "AQ==");
        Ok(())
    }

    #[test]
    fn test_extract_nested_once() -> anyhow::Result<()> {
        let body = json!({ "data": { "returnData": ["AQ=="] } });
        assert_eq!(extract_return_data(&body)?, "AQ==");
        Ok(())
    }

    #[test]
    fn test_extract_bare() -> anyhow::Result<()> {
        let body = json!({ "returnData": ["AQ==", "Ag=="], "returnCode": "ok" });
        assert_eq!(extract_return_data(&body)?, "AQ==");
        Ok(())
    }

    #[test]
    fn test_extract_missing() {
        for body in [
            json!({}),
            json!({ "data": { "data": { "returnData": [] } } }),
            json!({ "data": { "data": { "returnData": null } } }),
            json!({ "data": { "returnData": [null] } }),
        ] {
            assert!(matches!(
                extract_return_data(&body),
                Err(TransportError::ReturnDataNotFound)
            ));
        }
    }

    #[test]
    fn test_extract_failed_return_code() {
        let body = json!({
            "data": { "data": {
                "returnData": null,
                "returnCode": "user error",
                "returnMessage": "Tournament does not exist"
            } }
        });
        match extract_return_data(&body) {
            Err(TransportError::QueryFailed { code, message }) => {
                assert_eq!(code, "user error");
                assert_eq!(message, "Tournament does not exist");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_return_data_to_hex() -> anyhow::Result<()> {
        assert_eq!(return_data_to_hex("AAAAAQ==")?, "00000001");
        assert_eq!(return_data_to_hex("")?, "");
        assert!(matches!(
            return_data_to_hex("not base64!"),
            Err(TransportError::Base64Decode(_))
        ));
        Ok(())
    }

    #[test]
    fn test_request_body() -> anyhow::Result<()> {
        let t = transport("https://devnet-api.multiversx.com/");
        assert_eq!(t.make_endpoint(), "https://devnet-api.multiversx.com/vm-values/query");
        let req = t.make_request(GET_TOURNAMENT, vec![encode_top_u64(5)]);
        assert_eq!(
            serde_json::to_value(&req)?,
            json!({ "scAddress": TEST_CONTRACT_ADDR, "funcName": "getTournament", "args": ["05"] })
        );
        Ok(())
    }

    #[test]
    fn test_invalid_contract() {
        assert!(matches!(
            GatewayTransport::try_new("http://localhost", "erd1bad", None),
            Err(TransportError::InvalidContractAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_get_tournament_from_gateway() -> anyhow::Result<()> {
        let record = TestTournamentBuilder::default()
            .add_participant(player_addr(1))
            .add_participant(player_addr(2))
            .with_status(TournamentStatus::Active)
            .build();
        let gateway = MockGateway::start(ok_body(&record_to_base64(&record))).await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_tournament(3).await?, Some(record));

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["funcName"], "getTournament");
        assert_eq!(requests[0]["args"], json!(["03"]));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_game_config_from_gateway() -> anyhow::Result<()> {
        let config = TestGameConfigBuilder::default().allow_late_join(true).build();
        let gateway = MockGateway::start(ok_body(&record_to_base64(&config))).await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_game_config(1).await?, Some(config));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_record_is_none() -> anyhow::Result<()> {
        let gateway = MockGateway::start(json!({
            "data": { "data": { "returnData": null, "returnCode": "user error" } }
        }))
        .await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_tournament(99).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_bad_status_is_none() -> anyhow::Result<()> {
        let gateway = MockGateway::start_with_status(500, json!({ "error": "boom" })).await?;
        let t = transport(&gateway.url());
        assert!(matches!(
            t.query(GET_TOURNAMENT, vec![]).await,
            Err(TransportError::StatusCodeNotOk(500))
        ));
        assert_eq!(t.get_tournament(1).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_payload_is_error() -> anyhow::Result<()> {
        // Four bytes can't hold a tournament
        let gateway = MockGateway::start(ok_body("AAAAAQ==")).await?;
        let t = transport(&gateway.url());
        assert!(matches!(
            t.get_tournament(1).await,
            Err(thub_core::error::Error::Truncated { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_counters_and_ids() -> anyhow::Result<()> {
        let gateway = MockGateway::start(ok_body("AAAAAAAAAAEAAAAAAAAAAg==")).await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_active_tournament_ids().await?, Some(vec![1, 2]));

        let gateway = MockGateway::start(ok_body("")).await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_number_of_tournaments().await?, Some(0));
        Ok(())
    }

    #[tokio::test]
    async fn test_fees() -> anyhow::Result<()> {
        // 0.5 EGLD
        let gateway = MockGateway::start(ok_body("BvBbWdOyAAA=")).await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_tournament_fee().await?, Some(500_000_000_000_000_000));
        assert_eq!(gateway.requests()[0]["funcName"], "getTournamentFee");
        assert!(matches!(
            t.get_house_fee_percentage().await,
            Err(thub_core::error::Error::Overflow)
        ));

        let gateway = MockGateway::start(ok_body("AfQ=")).await?;
        let t = transport(&gateway.url());
        assert_eq!(t.get_house_fee_percentage().await?, Some(500));
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout() -> anyhow::Result<()> {
        let gateway = MockGateway::start_silent().await?;
        let t = GatewayTransport::try_new(
            &gateway.url(),
            TEST_CONTRACT_ADDR,
            Some(Duration::from_millis(200)),
        )?;
        assert!(matches!(
            t.query(GET_NUMBER_OF_GAMES, vec![]).await,
            Err(TransportError::Timeout)
        ));
        assert_eq!(t.get_number_of_games().await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_is_none() -> anyhow::Result<()> {
        let t = transport("http://127.0.0.1:9");
        assert!(t.query(GET_NUMBER_OF_GAMES, vec![]).await.is_err());
        assert_eq!(t.get_number_of_games().await?, None);
        Ok(())
    }
}
