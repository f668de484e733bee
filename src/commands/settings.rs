//! Builds a settings value from merged command-line arguments.

use anyhow::Result;

use crate::cli::{CommonArgs, CoverallsOpts, InstrumentOpts, ReportOpts};
use crate::minicover::coveralls::CoverallsSettings;
use crate::minicover::report::ReportTypes;
use crate::minicover::settings::MiniCoverSettings;

pub(crate) fn base_settings(common: &CommonArgs) -> MiniCoverSettings {
    let mut settings = MiniCoverSettings::new();
    if let Some(tool_path) = &common.tool_path {
        settings = settings.with_tool_path(tool_path.clone());
    }
    if let Some(workdir) = &common.workdir {
        settings = settings.with_workdir(workdir.clone());
    }
    if let Some(coverage_file) = &common.coverage_file {
        settings = settings.with_coverage_file(coverage_file.clone());
    }
    settings
}

pub(crate) fn apply_instrument(
    mut settings: MiniCoverSettings,
    opts: &InstrumentOpts,
) -> MiniCoverSettings {
    for pattern in &opts.assemblies {
        settings = settings.with_assemblies_matching(pattern);
    }
    for pattern in &opts.exclude_assemblies {
        settings = settings.without_assemblies_matching(pattern);
    }
    for pattern in &opts.sources {
        settings = settings.with_sources_matching(pattern);
    }
    for pattern in &opts.exclude_sources {
        settings = settings.without_sources_matching(pattern);
    }
    if let Some(hits_file) = &opts.hits_file {
        settings = settings.with_hits_file(hits_file.clone());
    }
    settings
}

pub(crate) fn apply_report(
    mut settings: MiniCoverSettings,
    opts: &ReportOpts,
    coveralls: &CoverallsOpts,
) -> Result<MiniCoverSettings> {
    if !opts.report.is_empty() {
        let types: ReportTypes = opts.report.iter().copied().collect();
        settings = settings.generate_report(types);
    }
    if let Some(prefix) = &opts.report_prefix {
        settings = settings.with_report_prefix(prefix.clone());
    }
    if let Some(threshold) = opts.threshold {
        settings = settings.with_threshold(threshold);
    }
    if opts.non_fatal_threshold {
        settings = settings.with_non_fatal_threshold();
    }
    if let Some(coveralls) = build_coveralls(coveralls)? {
        settings = settings.with_coveralls(coveralls);
    }
    Ok(settings)
}

fn build_coveralls(opts: &CoverallsOpts) -> Result<Option<CoverallsSettings>> {
    if !opts.any_set() {
        return Ok(None);
    }

    let mut coveralls = CoverallsSettings::new();
    coveralls.root_path = opts.root_path.clone();
    coveralls.service_job_id = opts.service_job_id.clone();
    coveralls.service_name = opts.service_name.clone();
    coveralls.repo_token = opts.repo_token.clone();
    coveralls.commit = opts.commit.clone();
    coveralls.commit_message = opts.commit_message.clone();
    coveralls.commit_author_name = opts.commit_author_name.clone();
    coveralls.commit_author_email = opts.commit_author_email.clone();
    coveralls.committer_name = opts.committer_name.clone();
    coveralls.committer_email = opts.committer_email.clone();
    coveralls.branch = opts.branch.clone();
    coveralls.remote = opts.remote.clone();
    coveralls.remote_url = opts.remote_url.clone();

    if opts.travis || opts.travis_pro {
        coveralls = coveralls.use_travis_defaults(opts.travis_pro)?;
    }
    Ok(Some(coveralls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minicover::report::ReportKind;

    #[test]
    fn test_base_settings_from_common_args() {
        let common = CommonArgs {
            workdir: Some("../".into()),
            coverage_file: Some("cov.json".to_string()),
            ..CommonArgs::default()
        };

        let settings = base_settings(&common);
        assert_eq!(
            settings.workdir.as_deref(),
            Some(std::path::Path::new("../"))
        );
        assert_eq!(settings.coverage_file, "cov.json");
    }

    #[test]
    fn test_apply_instrument_collects_globs() {
        let opts = InstrumentOpts {
            assemblies: vec!["test/**/*.dll".to_string()],
            exclude_sources: vec!["src/gen/**".to_string()],
            hits_file: Some("hits.txt".to_string()),
            ..InstrumentOpts::default()
        };

        let settings = apply_instrument(MiniCoverSettings::new(), &opts);
        assert!(settings.assembly_include_patterns.contains("test/**/*.dll"));
        assert!(settings.source_exclude_patterns.contains("src/gen/**"));
        assert_eq!(settings.hits_file, "hits.txt");
    }

    #[test]
    fn test_apply_report_keeps_default_kinds_when_unset() {
        let settings = apply_report(
            MiniCoverSettings::new(),
            &ReportOpts::default(),
            &CoverallsOpts::default(),
        )
        .unwrap();
        assert!(settings.report_types.contains(ReportKind::Console));
        assert!(settings.coveralls.is_none());
    }

    #[test]
    fn test_apply_report_builds_coveralls_block() {
        let coveralls = CoverallsOpts {
            repo_token: Some("tok".to_string()),
            ..CoverallsOpts::default()
        };

        let settings = apply_report(
            MiniCoverSettings::new(),
            &ReportOpts {
                report: vec![ReportKind::Coveralls],
                ..ReportOpts::default()
            },
            &coveralls,
        )
        .unwrap();

        assert!(settings.report_types.contains(ReportKind::Coveralls));
        let block = settings.coveralls.unwrap();
        assert_eq!(block.repo_token.as_deref(), Some("tok"));
        assert!(block.branch.is_none());
    }
}
