use std::error::Error;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_rds::config::Region;
use aws_sdk_rds::error::DisplayErrorContext;
use aws_sdk_rds::types::DbInstance;
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::models::{DbInstanceSummary, InstancePage};
use super::session::{InventorySession, SessionProvider};

/// Used for the identity lookup when the profile names no region.
const FALLBACK_REGION: &str = "us-east-1";

/// Opens sessions through the standard AWS credential chain for a named
/// profile (`~/.aws/config`, `~/.aws/credentials`, SSO caches).
#[derive(Debug, Clone, Default)]
pub struct AwsSessionProvider;

impl AwsSessionProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionProvider for AwsSessionProvider {
    type Session = AwsSession;

    async fn open(&self, profile: &str) -> AppResult<AwsSession> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;

        let sts_region = config
            .region()
            .cloned()
            .unwrap_or_else(|| Region::new(FALLBACK_REGION));
        let sts_config = aws_sdk_sts::config::Builder::from(&config)
            .region(sts_region)
            .build();
        let identity = aws_sdk_sts::Client::from_conf(sts_config)
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| provider_error("sts:GetCallerIdentity", err))?;

        let account_id = identity.account().map(ToOwned::to_owned).ok_or_else(|| {
            AppError::Provider(format!(
                "sts:GetCallerIdentity returned no account for profile {profile}"
            ))
        })?;
        debug!(profile, account_id = %account_id, "resolved caller identity");

        Ok(AwsSession {
            account_id,
            config,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AwsSession {
    account_id: String,
    config: SdkConfig,
}

impl AwsSession {
    fn rds_client(&self, region: &str) -> aws_sdk_rds::Client {
        let config = aws_sdk_rds::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .build();
        aws_sdk_rds::Client::from_conf(config)
    }
}

#[async_trait]
impl InventorySession for AwsSession {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    async fn describe_db_instances(
        &self,
        region: &str,
        marker: Option<String>,
    ) -> AppResult<InstancePage> {
        let output = self
            .rds_client(region)
            .describe_db_instances()
            .set_marker(marker)
            .send()
            .await
            .map_err(|err| provider_error("rds:DescribeDBInstances", err))?;

        Ok(InstancePage {
            instances: output.db_instances().iter().map(summarize).collect(),
            next_marker: output.marker().map(ToOwned::to_owned),
        })
    }
}

fn summarize(instance: &DbInstance) -> DbInstanceSummary {
    let field = |value: Option<&str>| value.unwrap_or_default().to_string();

    DbInstanceSummary {
        status: field(instance.db_instance_status()),
        identifier: field(instance.db_instance_identifier()),
        instance_class: field(instance.db_instance_class()),
        engine: field(instance.engine()),
    }
}

fn provider_error<E: Error>(operation: &str, err: E) -> AppError {
    AppError::Provider(format!("{operation} failed: {}", DisplayErrorContext(err)))
}
