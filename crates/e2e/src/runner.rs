//! Scenario orchestration: login, project selection, card assertions

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::board::ProjectsPage;
use crate::error::{E2eError, E2eResult};
use crate::fixtures::{Credentials, ScenarioFixture};
use crate::login::LoginPage;
use crate::session::Session;

/// Result of one fixture-driven scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Aggregate result of a suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Drives every fixture record through the login and board page objects.
pub struct ScenarioRunner {
    base_url: String,
    credentials: Credentials,
    fixtures: Vec<ScenarioFixture>,
}

impl ScenarioRunner {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
        fixtures: Vec<ScenarioFixture>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            fixtures,
        }
    }

    /// Run every fixture record against `session`, continuing past
    /// failures so one bad card does not hide the rest.
    pub async fn run_all(&self, session: &dyn Session) -> SuiteResult {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        info!("running {} scenario(s)...", self.fixtures.len());

        for fixture in &self.fixtures {
            let result = self.run_scenario(session, fixture).await;
            if result.success {
                passed += 1;
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "suite finished: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        SuiteResult {
            total: self.fixtures.len(),
            passed,
            failed,
            duration_ms,
            results,
        }
    }

    /// Run a single fixture record.
    pub async fn run_scenario(
        &self,
        session: &dyn Session,
        fixture: &ScenarioFixture,
    ) -> ScenarioResult {
        let start = Instant::now();
        let name = fixture.scenario_name();
        debug!(scenario = %name, "starting");

        let outcome = self.execute(session, fixture).await;

        ScenarioResult {
            name,
            success: outcome.is_ok(),
            duration_ms: start.elapsed().as_millis() as u64,
            error: outcome.err().map(|e| e.to_string()),
        }
    }

    async fn execute(&self, session: &dyn Session, fixture: &ScenarioFixture) -> E2eResult<()> {
        session.goto(&self.base_url).await?;

        let login = LoginPage::new(session);
        login.validate().await?;
        login.login(&self.credentials).await?;

        let board = ProjectsPage::new(session);
        board.validate().await?;

        board.select_project(fixture.project_type).await?;
        if !board.is_project_selected(fixture.project_type).await? {
            return Err(E2eError::ProjectNotSelected(
                fixture.project_type.display_name().to_string(),
            ));
        }

        let cards = board.cards_in_column(fixture.column).await?;
        let card = cards
            .iter()
            .find(|card| card.title() == fixture.text)
            .ok_or_else(|| E2eError::CardNotFound {
                title: fixture.text.clone(),
                project: fixture.project_type.display_name().to_string(),
                column: fixture.column.display_name().to_string(),
            })?;

        if card.tags() != fixture.tags.as_slice() {
            return Err(E2eError::TagMismatch {
                title: fixture.text.clone(),
                expected: fixture.tags.clone(),
                actual: card.tags().to_vec(),
            });
        }

        Ok(())
    }

    /// Write the suite results artifact as JSON.
    pub fn write_results(&self, results: &SuiteResult, output_dir: &Path) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join("test-results.json");
        std::fs::write(&path, serde_json::to_string_pretty(results)?)?;

        info!("results written to {}", path.display());
        Ok(path)
    }
}

/// Poll the application root until it answers, so the suite does not race
/// the app server's startup. Individual locator actions still rely on the
/// driver's own semantics.
pub async fn wait_for_app(base_url: &str, timeout: Duration) -> E2eResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = Instant::now();
    let mut attempts = 0;

    while start.elapsed() < timeout {
        attempts += 1;

        match client.get(base_url).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            Ok(resp) => {
                warn!("readiness check returned {}", resp.status());
            }
            Err(e) => {
                if attempts == 1 {
                    info!("waiting for application at {}...", base_url);
                }
                // Connection refused is expected while the app is starting.
                if !e.is_connect() {
                    warn!("readiness check error: {}", e);
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    Err(E2eError::AppNotReady(attempts))
}
