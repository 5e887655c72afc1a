//! Export coordinator - main orchestrator for the export process
//!
//! Startup order is fixed: the credential is resolved before the store is
//! contacted, and the store is contacted before the output file is created.
//! Everything acquired along the way lives in one [`RunContext`] that is torn
//! down on every exit path.

use crate::adapters::credentials::{resolve_credential, CredentialSource};
use crate::adapters::store::{RecordStore, StoreConnector};
use crate::config::{SecretString, UnitExportConfig};
use crate::core::export::summary::ExportSummary;
use crate::core::export::writer::CsvExporter;
use crate::core::transform::flatten_user;
use crate::domain::Result;
use chrono::{DateTime, Local};
use std::fs::File;
use std::time::Instant;

/// Everything a single export run holds on to
///
/// Built once by [`ExportCoordinator`], consumed by
/// [`ExportCoordinator::execute_export`]. The output handle is only opened
/// once the scan has been accepted by the store.
pub struct RunContext {
    config: UnitExportConfig,
    credential: SecretString,
    store: Box<dyn RecordStore>,
    output: Option<CsvExporter<File>>,
}

impl RunContext {
    pub fn new(
        config: UnitExportConfig,
        credential: SecretString,
        store: Box<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            credential,
            store,
            output: None,
        }
    }

    /// Tear down in reverse order of acquisition: file, connection, credential
    async fn release(mut self) {
        drop(self.output.take());
        self.store.close().await;
        drop(self.credential);
        tracing::debug!("Run context released");
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    context: RunContext,
}

impl ExportCoordinator {
    /// Resolve the credential from the configured source and connect
    ///
    /// # Errors
    ///
    /// - [`Credential`](crate::domain::UnitExportError::Credential) if the
    ///   password cannot be read; no connection is attempted in that case
    /// - [`Connection`](crate::domain::UnitExportError::Connection) if the
    ///   store is unreachable or rejects the credential
    pub async fn new(config: UnitExportConfig, connector: &dyn StoreConnector) -> Result<Self> {
        let credential = resolve_credential(&config.credential)?;
        Self::connect(config, credential, connector).await
    }

    /// Same as [`new`](Self::new) with an explicit credential source
    pub async fn with_credential_source(
        config: UnitExportConfig,
        source: &dyn CredentialSource,
        connector: &dyn StoreConnector,
    ) -> Result<Self> {
        let credential = source.get(&config.credential.key_path, &config.credential.value_name)?;
        Self::connect(config, credential, connector).await
    }

    async fn connect(
        config: UnitExportConfig,
        credential: SecretString,
        connector: &dyn StoreConnector,
    ) -> Result<Self> {
        tracing::info!(
            uri = %config.mongodb.redacted_uri(),
            database = %config.mongodb.database,
            collection = %config.mongodb.collection,
            "Connecting to record store"
        );
        let store = connector.connect(&config.mongodb, &credential).await?;
        Ok(Self::from_context(RunContext::new(config, credential, store)))
    }

    pub fn from_context(context: RunContext) -> Self {
        Self { context }
    }

    /// Execute the export with the current local time as run timestamp
    pub async fn execute_export(self) -> Result<ExportSummary> {
        self.execute_export_at(Local::now()).await
    }

    /// Execute the export
    ///
    /// 1. Starts the collection scan
    /// 2. Creates the timestamped output file and writes the header
    /// 3. For each user: flattens and writes one row per unit
    /// 4. Flushes and closes the file, then closes the store
    ///
    /// Any failure aborts the run. A file that was already created is left
    /// in whatever state it reached, with buffered rows flushed.
    pub async fn execute_export_at(self, started_at: DateTime<Local>) -> Result<ExportSummary> {
        let mut context = self.context;
        let result = Self::export_records(&mut context, started_at).await;

        context.release().await;

        match &result {
            Ok(summary) => summary.log_summary(),
            Err(e) => {
                crate::log_error_with_context!(e, "Export aborted");
            }
        }
        result
    }

    async fn export_records(
        context: &mut RunContext,
        started_at: DateTime<Local>,
    ) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let source = context.store.describe();

        tracing::info!(store = %source, "Scanning collection");
        let mut cursor = context.store.scan_all().await?;

        let exporter = context.output.insert(CsvExporter::create(
            &context.config.export.output_dir,
            &started_at,
        )?);
        let output_path = exporter.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let mut summary = ExportSummary::new(output_path);

        while let Some(user) = cursor.next_record().await? {
            summary.users_scanned += 1;

            if user.units.is_empty() {
                summary.users_without_units += 1;
                tracing::debug!(user = %user.name, "User has no units, nothing to export");
                continue;
            }

            for row in flatten_user(&user) {
                tracing::debug!(
                    user = %row.user_name,
                    unit = %row.unit_name,
                    code = %row.unit_code,
                    "Exporting unit"
                );
                exporter.write_row(&row)?;
            }
        }
        drop(cursor);

        summary.rows_written = exporter.rows_written();
        if let Some(exporter) = context.output.take() {
            exporter.finish()?;
        }

        Ok(summary.with_duration(start_time.elapsed()))
    }
}
