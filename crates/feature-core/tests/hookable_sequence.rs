
use feature_core::{CallOutcomeSet, FeatureLifecycle, FeatureTester, FeatureTesterError, HookableFeatureTester,
                   InMemoryEventRecorder, ResultCode, TestResult};
use std::sync::Arc;
use test_support::{outcomes, subject, FailingListener, RecordingTester, ScriptedHooks};

#[test]
fn without_collaborators_result_is_the_base_result() {
    let (suite, env, feature) = subject();
    let base = Arc::new(RecordingTester::default());
    let tester = HookableFeatureTester::new(base.clone());

    let hooked = tester.run(&suite, &env, &feature, false).expect("no listeners, no error");
    let expected: TestResult = RecordingTester::default().test(&suite, &env, &feature, false);

    assert_eq!(hooked.scenarios(), expected.scenarios());
    assert!(hooked.hook_outcomes().is_empty());
    assert_eq!(base.skips(), vec![false]);
    assert_eq!(hooked.result_code(), ResultCode::Passed);
}

#[test]
fn failing_before_hook_forces_skip_and_suppresses_after_hooks() {
    let (suite, env, feature) = subject();
    let base = Arc::new(RecordingTester::default());
    let hooks = Arc::new(ScriptedHooks::new(outcomes(&[("BeforeFeature #1", true), ("BeforeFeature #2", false)]),
                                            outcomes(&[("AfterFeature", true)])));
    let recorder = Arc::new(InMemoryEventRecorder::new());
    let tester = HookableFeatureTester::new(base.clone()).with_hook_gateway(hooks.clone())
                                                         .with_notification_gateway(recorder.clone());

    let hooked = tester.run(&suite, &env, &feature, false).unwrap();

    // el paso base recibe skip=true aunque el caller pidió false
    assert_eq!(base.skips(), vec![true]);
    assert_eq!(hooks.calls_for(FeatureLifecycle::Before).len(), 1);
    assert!(hooks.calls_for(FeatureLifecycle::After).is_empty());

    // sólo los outcomes BEFORE
    let calls: Vec<&str> = hooked.hook_outcomes().iter().map(|o| o.call()).collect();
    assert_eq!(calls, vec!["BeforeFeature #1", "BeforeFeature #2"]);
    assert!(hooked.hook_outcomes().iter().nth(1).unwrap().is_failure());
    assert_eq!(hooked.result_code(), ResultCode::Failed);
    assert!(hooked.scenarios().iter().all(|s| s.code == ResultCode::Skipped));
    assert_eq!(hooked.scenarios().len(), 3);

    let events = recorder.list();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event, FeatureLifecycle::Before);
    assert_eq!(events[0].result_code, None);
    assert_eq!(events[0].outcomes.as_ref().map(|o| o.len()), Some(2));
    assert_eq!(events[1].event, FeatureLifecycle::After);
    assert_eq!(events[1].result_code, Some(ResultCode::Failed));
    assert_eq!(events[1].fingerprint.as_deref(), Some(hooked.fingerprint().as_str()));
    assert_eq!(events[1].outcomes, Some(CallOutcomeSet::new()));
}

#[test]
fn caller_skip_never_dispatches_hooks_but_still_notifies() {
    let (suite, env, feature) = subject();
    let base = Arc::new(RecordingTester::default());
    let hooks = Arc::new(ScriptedHooks::new(outcomes(&[("BeforeFeature", true)]), outcomes(&[("AfterFeature", true)])));
    let recorder = Arc::new(InMemoryEventRecorder::new());
    let tester = HookableFeatureTester::new(base.clone()).with_hook_gateway(hooks.clone())
                                                         .with_notification_gateway(recorder.clone());

    let hooked = tester.run(&suite, &env, &feature, true).unwrap();

    assert!(hooks.calls.lock().unwrap().is_empty());
    assert_eq!(base.skips(), vec![true]);
    assert!(hooked.hook_outcomes().is_empty());

    let events = recorder.list();
    assert_eq!(events.iter().map(|e| e.event).collect::<Vec<_>>(), vec![FeatureLifecycle::Before, FeatureLifecycle::After]);
    assert!(events.iter().all(|e| e.outcomes == Some(CallOutcomeSet::new())));
}

#[test]
fn successful_hooks_merge_before_then_after() {
    let (suite, env, feature) = subject();
    let base = Arc::new(RecordingTester::default());
    let hooks = Arc::new(ScriptedHooks::new(outcomes(&[("b1", true), ("b2", true)]), outcomes(&[("a1", true), ("a2", false)])));
    let recorder = Arc::new(InMemoryEventRecorder::new());
    let tester = HookableFeatureTester::new(base.clone()).with_hook_gateway(hooks.clone())
                                                         .with_notification_gateway(recorder.clone());

    let hooked = tester.run(&suite, &env, &feature, false).unwrap();

    assert_eq!(base.skips(), vec![false]);
    let calls: Vec<&str> = hooked.hook_outcomes().iter().map(|o| o.call()).collect();
    assert_eq!(calls, vec!["b1", "b2", "a1", "a2"]);
    // un fallo AFTER no cambia el skip ya decidido, pero sí el código
    assert!(hooked.scenarios().iter().all(|s| s.code == ResultCode::Passed));
    assert_eq!(hooked.result_code(), ResultCode::Failed);

    // payloads de hooks: BEFORE sin resultado, AFTER con el resultado base
    let before = hooks.calls_for(FeatureLifecycle::Before);
    assert!(!before[0].had_result && !before[0].had_outcomes);
    let after = hooks.calls_for(FeatureLifecycle::After);
    assert!(after[0].had_result && !after[0].had_outcomes);
    assert_eq!(after[0].result_fingerprint.as_deref(), Some(hooked.fingerprint().as_str()));

    // la notificación AFTER lleva sólo los outcomes AFTER
    let after_events = recorder.list_for(FeatureLifecycle::After);
    let after_calls: Vec<String> = after_events[0].outcomes
                                                  .as_ref()
                                                  .unwrap()
                                                  .iter()
                                                  .map(|o| o.call().to_string())
                                                  .collect();
    assert_eq!(after_calls, vec!["a1", "a2"]);
}

#[test]
fn notifications_fire_once_each_without_hook_gateway() {
    let (suite, env, feature) = subject();
    let recorder = Arc::new(InMemoryEventRecorder::new());
    let tester = HookableFeatureTester::new(RecordingTester::default()).with_notification_gateway(recorder.clone());

    tester.run(&suite, &env, &feature, false).unwrap();
    tester.run(&suite, &env, &feature, true).unwrap();

    let seqs: Vec<u64> = recorder.list().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3]);
    assert_eq!(recorder.list_for(FeatureLifecycle::Before).len(), 2);
    assert_eq!(recorder.list_for(FeatureLifecycle::After).len(), 2);
}

#[test]
fn before_listener_failure_propagates_and_stops_the_sequence() {
    let (suite, env, feature) = subject();
    let base = Arc::new(RecordingTester::default());
    let mut tester = HookableFeatureTester::new(base.clone());
    tester.set_notification_gateway(Arc::new(FailingListener { event: FeatureLifecycle::Before }));

    let err = tester.run(&suite, &env, &feature, false).unwrap_err();

    assert!(matches!(err, FeatureTesterError::Notification { event: FeatureLifecycle::Before, .. }));
    assert!(base.skips().is_empty());
}

#[test]
fn after_listener_failure_propagates_after_base_ran() {
    let (suite, env, feature) = subject();
    let base = Arc::new(RecordingTester::default());
    let hooks = Arc::new(ScriptedHooks::new(CallOutcomeSet::new(), outcomes(&[("AfterFeature", true)])));
    let mut tester = HookableFeatureTester::new(base.clone());
    tester.set_hook_gateway(hooks.clone());
    tester.set_notification_gateway(Arc::new(FailingListener { event: FeatureLifecycle::After }));

    let err = tester.run(&suite, &env, &feature, false).unwrap_err();

    assert_eq!(err.to_string(), "notification for tester.feature_tested.after failed");
    assert_eq!(base.skips(), vec![false]);
    assert_eq!(hooks.calls_for(FeatureLifecycle::After).len(), 1);
}
