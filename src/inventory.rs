use tracing::debug;

use crate::api::models::{InstanceRecord, ScanFailure};
use crate::api::session::{InventorySession, SessionProvider};
use crate::error::{AppError, AppResult};
use crate::output::Output;

/// Records and recovered failures from one pass over profiles and regions.
#[derive(Debug, Default)]
pub struct Inventory {
    pub records: Vec<InstanceRecord>,
    pub failures: Vec<ScanFailure>,
}

/// Lists every available database instance in `region`, following the
/// pagination marker until the provider stops returning one.
pub async fn enumerate_instances<S: InventorySession>(
    session: &S,
    region: &str,
) -> AppResult<Vec<InstanceRecord>> {
    let mut records = Vec::new();
    let mut marker: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = session.describe_db_instances(region, marker.clone()).await?;
        pages += 1;
        debug!(
            region,
            page = pages,
            instances = page.instances.len(),
            "fetched db instance page"
        );

        records.extend(
            page.instances
                .into_iter()
                .filter(|instance| instance.is_available())
                .map(|instance| InstanceRecord {
                    account_id: session.account_id().to_string(),
                    region: region.to_string(),
                    instance_name: instance.identifier,
                    instance_type: instance.instance_class,
                    engine_type: instance.engine,
                }),
        );

        match page.next_marker {
            Some(next) if marker.as_deref() == Some(next.as_str()) => {
                return Err(AppError::Provider(format!(
                    "pagination marker repeated in {region}; aborting listing"
                )));
            }
            Some(next) => marker = Some(next),
            None => break,
        }
    }

    Ok(records)
}

/// Walks every profile × region pair in order. A profile whose session
/// cannot be opened is skipped whole; a failing region is skipped for that
/// profile only.
pub async fn collect<P: SessionProvider>(
    provider: &P,
    profiles: &[String],
    regions: &[String],
    output: &Output,
) -> Inventory {
    let mut inventory = Inventory::default();

    for profile in profiles {
        output.progress(&format!("Describe DB instances: {profile}"));

        let session = match provider.open(profile).await {
            Ok(session) => session,
            Err(err) => {
                debug!(profile = %profile, error = %err, "skipping profile");
                output.progress(&format!("Error accessing profile {profile}: {err}"));
                inventory.failures.push(ScanFailure {
                    profile: profile.clone(),
                    region: None,
                    message: err.to_string(),
                });
                continue;
            }
        };

        for region in regions {
            match enumerate_instances(&session, region).await {
                Ok(records) => inventory.records.extend(records),
                Err(err) => {
                    debug!(profile = %profile, region = %region, error = %err, "skipping region");
                    output.progress(&format!(
                        "Error accessing region {region} with profile {profile}: {err}"
                    ));
                    inventory.failures.push(ScanFailure {
                        profile: profile.clone(),
                        region: Some(region.clone()),
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    inventory
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::api::models::{DbInstanceSummary, InstancePage};

    struct PagedSession {
        pages: Mutex<Vec<InstancePage>>,
        requested: Mutex<Vec<Option<String>>>,
    }

    impl PagedSession {
        fn new(pages: Vec<InstancePage>) -> Self {
            Self {
                pages: Mutex::new(pages),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl InventorySession for PagedSession {
        fn account_id(&self) -> &str {
            "111122223333"
        }

        async fn describe_db_instances(
            &self,
            _region: &str,
            marker: Option<String>,
        ) -> AppResult<InstancePage> {
            self.requested.lock().unwrap().push(marker);
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                return Ok(InstancePage::default());
            }
            Ok(pages.remove(0))
        }
    }

    fn instance(id: &str, status: &str) -> DbInstanceSummary {
        DbInstanceSummary {
            status: status.to_string(),
            identifier: id.to_string(),
            instance_class: "db.t3.micro".to_string(),
            engine: "mysql".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_listing_yields_no_records() {
        let session = PagedSession::new(vec![]);
        let records = enumerate_instances(&session, "us-east-1")
            .await
            .expect("listing should succeed");

        assert!(records.is_empty());
        assert_eq!(*session.requested.lock().unwrap(), [None]);
    }

    #[tokio::test]
    async fn follows_markers_and_keeps_only_available() {
        let session = PagedSession::new(vec![
            InstancePage {
                instances: vec![instance("a", "available"), instance("b", "stopped")],
                next_marker: Some("m1".to_string()),
            },
            InstancePage {
                instances: vec![instance("c", "creating"), instance("d", "available")],
                next_marker: None,
            },
        ]);

        let records = enumerate_instances(&session, "ap-northeast-1")
            .await
            .expect("listing should succeed");

        let names: Vec<_> = records.iter().map(|r| r.instance_name.as_str()).collect();
        assert_eq!(names, ["a", "d"]);
        assert!(records.iter().all(|r| r.region == "ap-northeast-1"));
        assert!(records.iter().all(|r| r.account_id == "111122223333"));
        assert_eq!(
            *session.requested.lock().unwrap(),
            [None, Some("m1".to_string())]
        );
    }

    #[tokio::test]
    async fn repeated_marker_is_an_error() {
        let page = InstancePage {
            instances: vec![],
            next_marker: Some("same".to_string()),
        };
        let session = PagedSession::new(vec![page.clone(), page.clone(), page]);

        let result = enumerate_instances(&session, "us-east-1").await;
        assert!(matches!(result, Err(AppError::Provider(_))));
    }
}
