// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the playback session lifecycle.
//!
//! These tests drive complete create → run → teardown cycles against the
//! scripted service and pump doubles, covering the clean path, stale-instance
//! recovery, fatal statuses, cancellation, and the independence of the three
//! failure channels.

use cutscene::application::playback::{CancelToken, PlaybackSession, RunOutcome};
use cutscene::config::PlaybackConfig;
use cutscene::domain::error::PlaybackError;
use cutscene::domain::session::SessionPhase;
use cutscene::domain::status::DecodeStatus;
use cutscene::domain::volume::Volume;
use cutscene::test_utils::{ManualPump, ScriptedService, ServiceCall};
use std::path::Path;

fn create_session(service: ScriptedService) -> PlaybackSession<ScriptedService> {
    PlaybackSession::create(
        service,
        &PlaybackConfig::default(),
        Path::new("movies/intro.avi"),
        Volume::new(0.5),
    )
    .expect("create should succeed")
}

#[test]
fn clean_run_finishes_without_errors() {
    let service = ScriptedService::clean();
    let log = service.call_log_handle();
    let session = create_session(service);
    assert_eq!(session.phase(), SessionPhase::Created);

    let mut pump = ManualPump::new();
    let report = session.run(&mut pump, &CancelToken::new());

    assert_eq!(report.outcome, RunOutcome::Finished);
    assert!(report.is_clean());
    assert!(report.primary.is_none());
    assert!(report.internal.is_none());
    assert!(report.close_error.is_none());

    // create, start, 4 polls (3 pending + success), close
    assert_eq!(
        log.kinds(),
        ["create", "start_render", "poll", "poll", "poll", "poll", "close"]
    );
    // 4 loop ticks plus the final post-close frame
    assert_eq!(pump.ticks(), 5);
    assert_eq!(pump.transitions(), 1);
    assert!(pump.is_frozen());
}

#[test]
fn create_passes_rescaled_volume_and_surface_handle() {
    let service = ScriptedService::clean();
    let log = service.call_log_handle();
    let session = create_session(service);
    let expected_surface = session.surface().handle().as_raw();

    match &log.calls()[0] {
        ServiceCall::Create {
            device_level,
            surface,
            ..
        } => {
            assert_eq!(*device_level, 64); // floor(0.5 * 128)
            assert_eq!(*surface, expected_surface);
        }
        other => panic!("expected a create call, got {other:?}"),
    }
}

#[test]
fn stale_instance_recovery_is_externally_identical_to_a_clean_create() {
    let stale = ScriptedService::clean()
        .with_create_results([DecodeStatus::DuplicateInstance, DecodeStatus::Success]);
    let stale_log = stale.call_log_handle();
    let session = create_session(stale);
    assert_eq!(session.phase(), SessionPhase::Created);

    let report = session.run(&mut ManualPump::new(), &CancelToken::new());
    assert!(report.is_clean());

    // exactly one forced close and one retry, then the normal lifecycle
    let kinds = stale_log.kinds();
    assert_eq!(kinds[0], "create");
    assert_eq!(kinds[1], "close");
    assert_eq!(kinds[2], "create");
    assert_eq!(kinds.iter().filter(|k| k.as_str() == "create").count(), 2);
}

#[test]
fn create_gives_up_after_one_retry() {
    let service = ScriptedService::clean().with_create_results([
        DecodeStatus::DuplicateInstance,
        DecodeStatus::DuplicateInstance,
    ]);
    let log = service.call_log_handle();
    let err = PlaybackSession::create(
        service,
        &PlaybackConfig::default(),
        Path::new("movies/intro.avi"),
        Volume::default(),
    )
    .expect_err("second duplicate should give up");

    assert_eq!(err, PlaybackError::Create(DecodeStatus::DuplicateInstance));
    assert_eq!(log.kinds(), ["create", "close", "create"]);
}

#[test]
fn missing_audio_stream_fails_the_run_but_still_closes() {
    let service = ScriptedService::clean().with_poll_results([
        DecodeStatus::StillDecoding,
        DecodeStatus::NoAudioStream,
    ]);
    let log = service.call_log_handle();
    let session = create_session(service);

    let report = session.run(&mut ManualPump::new(), &CancelToken::new());

    assert_eq!(report.outcome, RunOutcome::Failed);
    let primary = report.primary.expect("a poll error should be recorded");
    assert_eq!(primary, PlaybackError::Poll(DecodeStatus::NoAudioStream));
    assert_eq!(
        primary.status().describe(),
        "Video file has no audio streams"
    );
    assert_eq!(log.kinds().last().map(String::as_str), Some("close"));
}

#[test]
fn start_render_failure_skips_polling_but_not_teardown() {
    let service = ScriptedService::clean().with_start_result(DecodeStatus::NotCreated);
    let log = service.call_log_handle();
    let session = create_session(service);

    let mut pump = ManualPump::new();
    let report = session.run(&mut pump, &CancelToken::new());

    assert_eq!(report.outcome, RunOutcome::Failed);
    assert_eq!(
        report.primary,
        Some(PlaybackError::StartRender(DecodeStatus::NotCreated))
    );
    assert!(!log.kinds().iter().any(|k| k == "poll"));
    assert_eq!(log.kinds().last().map(String::as_str), Some("close"));
    // only the final post-close frame is pumped
    assert_eq!(pump.ticks(), 1);
    assert!(pump.is_frozen());
}

#[test]
fn cancellation_reaches_closed_without_success_or_failure() {
    let service = ScriptedService::clean().with_poll_results_pending_forever();
    let log = service.call_log_handle();
    let session = create_session(service);

    let cancel = CancelToken::new();
    let mut pump = ManualPump::cancel_after(&cancel, 5);
    let report = session.run(&mut pump, &cancel);

    assert_eq!(report.outcome, RunOutcome::Interrupted);
    assert!(report.primary.is_none());
    assert_eq!(log.kinds().last().map(String::as_str), Some("close"));
    assert!(pump.is_frozen());
}

#[test]
fn bad_termination_is_reported_on_an_otherwise_clean_run() {
    let service = ScriptedService::clean().with_bad_termination(-541478725, "Invalid data found");
    let session = create_session(service);

    let report = session.run(&mut ManualPump::new(), &CancelToken::new());

    // loop finished cleanly; only the secondary channel fired
    assert_eq!(report.outcome, RunOutcome::Finished);
    assert!(report.primary.is_none());
    let fault = report.internal.expect("internal fault should be reported");
    assert_eq!(fault.code, -541478725);
    assert_eq!(fault.message, "Invalid data found");
}

#[test]
fn bad_termination_and_loop_error_fire_independently() {
    let service = ScriptedService::clean()
        .with_poll_results([DecodeStatus::InternalError])
        .with_bad_termination(-2, "decode worker died");
    let session = create_session(service);

    let report = session.run(&mut ManualPump::new(), &CancelToken::new());

    assert_eq!(report.outcome, RunOutcome::Failed);
    assert_eq!(
        report.primary,
        Some(PlaybackError::Poll(DecodeStatus::InternalError))
    );
    assert!(report.internal.is_some());
}

#[test]
fn close_error_is_reported_without_erasing_the_primary_error() {
    let service = ScriptedService::clean()
        .with_poll_results([DecodeStatus::NoAudioStream])
        .with_close_results([DecodeStatus::NotCreated]);
    let session = create_session(service);

    let report = session.run(&mut ManualPump::new(), &CancelToken::new());

    assert_eq!(report.outcome, RunOutcome::Failed);
    assert_eq!(
        report.primary,
        Some(PlaybackError::Poll(DecodeStatus::NoAudioStream))
    );
    assert_eq!(
        report.close_error,
        Some(PlaybackError::Close(DecodeStatus::NotCreated))
    );
}

#[test]
fn close_error_alone_does_not_fail_the_outcome() {
    let service = ScriptedService::clean().with_close_results([DecodeStatus::InternalError]);
    let session = create_session(service);

    let report = session.run(&mut ManualPump::new(), &CancelToken::new());

    assert_eq!(report.outcome, RunOutcome::Finished);
    assert!(report.primary.is_none());
    assert_eq!(
        report.close_error,
        Some(PlaybackError::Close(DecodeStatus::InternalError))
    );
    assert!(!report.is_clean());
}

#[test]
fn describe_is_fixed_for_the_whole_enumeration() {
    for status in DecodeStatus::ALL {
        assert!(!status.describe().is_empty());
        assert_eq!(status.describe(), status.describe());
    }
    assert_eq!(
        DecodeStatus::NoAudioStream.describe(),
        "Video file has no audio streams"
    );
}
