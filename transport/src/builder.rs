use crate::cached::CachedHub;
use crate::error::{TransportError, TransportResult};
use crate::gateway::GatewayTransport;
use std::time::Duration;
use thub_core::transport::HubQueryT;
use thub_env::{parse_with_default_api, Config};
use tracing::info;

#[derive(Default)]
pub struct TransportBuilder {
    api: Option<String>,
    contract: Option<String>,
    timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl TransportBuilder {
    /// An API URL, or a network name such as `devnet`.
    pub fn with_api<S: AsRef<str>>(mut self, api: S) -> Self {
        self.api = Some(parse_with_default_api(api.as_ref()).to_owned());
        self
    }

    pub fn with_contract<S: Into<String>>(mut self, contract: S) -> Self {
        self.contract = Some(contract.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Fill in whatever hasn't been set explicitly from the config file.
    pub fn try_with_config(mut self, config: &Config) -> TransportResult<Self> {
        if let Some(ref gateway) = config.gateway {
            if self.api.is_none() {
                self = self.with_api(&gateway.api);
            }
            if self.contract.is_none() {
                self.contract = Some(gateway.contract.clone());
            }
            if self.timeout.is_none() {
                self.timeout = gateway.timeout_ms.map(Duration::from_millis);
            }
        } else if self.api.is_none() || self.contract.is_none() {
            return Err(TransportError::InvalidConfig("Gateway section missing".into()));
        }
        if self.cache_ttl.is_none() {
            self.cache_ttl = config.cache.as_ref().map(|c| Duration::from_secs(c.ttl_secs));
        }
        Ok(self)
    }

    pub fn build(self) -> TransportResult<Box<dyn HubQueryT>> {
        let api = self.api.ok_or(TransportError::UnspecifiedApi)?;
        let contract = self.contract.ok_or(TransportError::UnspecifiedContract)?;
        info!("Build GatewayTransport for {} at {}", contract, api);
        let transport = GatewayTransport::try_new(&api, &contract, self.timeout)?;
        match self.cache_ttl {
            Some(ttl) => {
                info!("Cache query results for {:?}", ttl);
                Ok(Box::new(CachedHub::with_ttl(Box::new(transport), ttl)))
            }
            None => Ok(Box::new(transport)),
        }
    }
}
