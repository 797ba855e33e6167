//! End-to-end trigger scenarios driven through the testing rule.
//!
//! Geometry shorthand: `set_dimensions(scroll_height, scroll_top,
//! content_height)`. With the default `"15%"` threshold and a 1000 px
//! viewport, `(1200, 200, 1000)` puts the user well past the trigger
//! distance: reload_y = 1000 + 150, distance = (1200 - 1000 - 200) - 1150 =
//! -1150.

use scrollwatch_foundation::{SampleOutcome, Threshold, TriggerState};
use scrollwatch_testing::TriggerTestRule;

fn crossing_rule() -> TriggerTestRule {
    let rule = TriggerTestRule::mounted();
    rule.set_dimensions(1200.0, 200.0, 1000.0);
    rule
}

#[test]
fn percent_threshold_replaces_pixel_mode() {
    let rule = TriggerTestRule::new();
    rule.trigger().set_threshold("100px");
    assert_eq!(rule.trigger().threshold(), Threshold::Pixels(100.0));

    rule.trigger().set_threshold("15%");
    assert_eq!(rule.trigger().threshold(), Threshold::Percent(0.15));

    rule.trigger().set_threshold("64px");
    assert_eq!(rule.trigger().threshold(), Threshold::Pixels(64.0));
}

#[test]
fn crossing_fires_load_exactly_once() {
    let rule = crossing_rule();
    rule.scroll(1000);
    assert_eq!(rule.pending_writes(), 1);
    assert_eq!(rule.notification_count(), 0, "notification is write-phase only");

    rule.flush_writes();
    assert_eq!(rule.notification_count(), 1);
    assert_eq!(rule.state(), TriggerState::Loading);
}

#[test]
fn disabled_trigger_ignores_crossing_geometry() {
    let rule = crossing_rule();
    rule.trigger().set_enabled(false);

    assert_eq!(rule.trigger().on_scroll_sample(1000), SampleOutcome::Suppressed);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 0);
    assert_eq!(rule.state(), TriggerState::Disabled);
}

#[test]
fn complete_rearms_for_the_next_cycle() {
    let rule = crossing_rule();
    rule.scroll(1000);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 1);

    // complete() through the delivered handle re-arms the shared trigger.
    rule.complete_last();
    assert_eq!(rule.state(), TriggerState::Enabled);

    rule.scroll(1032);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 2);
    assert_eq!(rule.state(), TriggerState::Loading);
}

#[test]
fn loading_suppresses_further_samples() {
    let rule = crossing_rule();
    rule.scroll(1000);
    rule.flush_writes();
    assert_eq!(rule.state(), TriggerState::Loading);

    assert_eq!(rule.trigger().on_scroll_sample(2000), SampleOutcome::Suppressed);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 1);
}

#[test]
fn samples_inside_throttle_window_are_dropped() {
    let rule = TriggerTestRule::mounted();
    // Below-threshold geometry so processed samples stay side-effect free.
    rule.trigger().set_threshold("0px");
    rule.set_dimensions(3000.0, 0.0, 1000.0);

    assert_eq!(rule.trigger().on_scroll_sample(1000), SampleOutcome::BelowThreshold);
    assert_eq!(rule.trigger().on_scroll_sample(1016), SampleOutcome::Throttled);
    assert_eq!(rule.trigger().on_scroll_sample(1031), SampleOutcome::Throttled);
    // Exactly 32 ms after the last *processed* sample.
    assert_eq!(rule.trigger().on_scroll_sample(1032), SampleOutcome::BelowThreshold);
}

#[test]
fn throttled_samples_do_not_advance_the_clock() {
    let rule = TriggerTestRule::mounted();
    rule.trigger().set_threshold("0px");
    rule.set_dimensions(3000.0, 0.0, 1000.0);

    assert_eq!(rule.trigger().on_scroll_sample(1000), SampleOutcome::BelowThreshold);
    assert_eq!(rule.trigger().on_scroll_sample(1020), SampleOutcome::Throttled);
    // 1040 is within 32 ms of the throttled 1020 but not of the processed 1000.
    assert_eq!(rule.trigger().on_scroll_sample(1040), SampleOutcome::BelowThreshold);
}

#[test]
fn zero_content_height_is_ignored() {
    let rule = TriggerTestRule::mounted();
    rule.set_dimensions(1200.0, 200.0, 0.0);

    assert_eq!(rule.trigger().on_scroll_sample(1000), SampleOutcome::NoGeometry);
    assert_eq!(rule.pending_writes(), 0);
}

#[test]
fn only_strictly_negative_distance_crosses() {
    let rule = TriggerTestRule::mounted();
    rule.trigger().set_threshold("0px");

    // distance = (2500 - 1000 - 500) - 1000 = 0: not crossed.
    rule.set_dimensions(2500.0, 500.0, 1000.0);
    assert_eq!(rule.trigger().on_scroll_sample(1000), SampleOutcome::BelowThreshold);

    // distance = -1: crossed.
    rule.set_dimensions(2500.0, 501.0, 1000.0);
    assert_eq!(rule.trigger().on_scroll_sample(1032), SampleOutcome::Scheduled);
}

#[test]
fn enabling_twice_keeps_a_single_subscription() {
    let rule = TriggerTestRule::mounted();
    assert_eq!(rule.viewport().listener_count(), 1);

    rule.trigger().set_enabled(true);
    rule.trigger().set_enabled(true);
    assert_eq!(rule.viewport().listener_count(), 1);
    assert!(rule.trigger().is_listening());
}

#[test]
fn no_subscription_before_mount() {
    let rule = TriggerTestRule::new();
    assert!(!rule.trigger().is_listening());

    // Enabling before the mount sequence must not subscribe.
    rule.trigger().set_enabled(true);
    assert_eq!(rule.viewport().listener_count(), 0);

    rule.trigger().on_mount();
    assert_eq!(rule.viewport().listener_count(), 1);
}

#[test]
fn mounting_while_disabled_installs_no_subscription() {
    let rule = TriggerTestRule::new();
    rule.trigger().set_enabled(false);
    rule.trigger().on_mount();
    assert_eq!(rule.viewport().listener_count(), 0);

    rule.trigger().set_enabled(true);
    assert_eq!(rule.viewport().listener_count(), 1);
}

#[test]
fn unmount_tears_down_the_subscription() {
    let rule = TriggerTestRule::mounted();
    assert_eq!(rule.viewport().listener_count(), 1);

    rule.trigger().on_unmount();
    assert_eq!(rule.viewport().listener_count(), 0);
    rule.trigger().on_unmount();
    assert_eq!(rule.viewport().listener_count(), 0);
}

#[test]
fn disable_tears_down_and_reenable_restores() {
    let rule = crossing_rule();
    rule.trigger().set_enabled(false);
    assert_eq!(rule.viewport().listener_count(), 0);

    // Events while torn down go nowhere.
    rule.scroll(1000);
    assert_eq!(rule.pending_writes(), 0);

    rule.trigger().set_enabled(true);
    assert_eq!(rule.viewport().listener_count(), 1);
    rule.scroll(2000);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 1);
}

#[test]
fn disable_after_schedule_suppresses_notification() {
    let rule = crossing_rule();
    rule.scroll(1000);
    assert_eq!(rule.pending_writes(), 1);

    // Disabled between scheduling and the write phase: the queued write
    // still runs, but its state re-check drops the notification.
    rule.trigger().set_enabled(false);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 0);
    assert_eq!(rule.state(), TriggerState::Disabled);
}

#[test]
fn two_scheduled_writes_deliver_one_notification() {
    let rule = crossing_rule();
    rule.scroll(1000);
    rule.scroll(1032);
    assert_eq!(rule.pending_writes(), 2);

    // The first write starts the load; the second sees Loading and drops.
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 1);
    assert_eq!(rule.state(), TriggerState::Loading);
}

#[test]
fn malformed_threshold_never_crosses() {
    let rule = crossing_rule();
    rule.trigger().set_threshold("abc");
    assert!(rule.trigger().threshold().magnitude().is_nan());

    assert_eq!(rule.trigger().on_scroll_sample(1000), SampleOutcome::BelowThreshold);
    rule.flush_writes();
    assert_eq!(rule.notification_count(), 0);
}

#[test]
fn disable_overwrites_loading_and_complete_is_unconditional() {
    let rule = crossing_rule();
    rule.scroll(1000);
    rule.flush_writes();
    assert_eq!(rule.state(), TriggerState::Loading);

    // Disabling mid-load drops the loading flag outright.
    rule.trigger().set_enabled(false);
    assert_eq!(rule.state(), TriggerState::Disabled);

    // complete() from the in-flight cycle re-enables regardless.
    rule.complete_last();
    assert_eq!(rule.state(), TriggerState::Enabled);
}

#[test]
fn suppressed_samples_do_not_advance_the_clock() {
    let rule = crossing_rule();
    rule.scroll(1000);
    rule.flush_writes();
    assert_eq!(rule.state(), TriggerState::Loading);

    assert_eq!(rule.trigger().on_scroll_sample(5000), SampleOutcome::Suppressed);
    rule.complete_last();
    // If the suppressed sample had advanced the clock, 5010 would throttle.
    assert_eq!(rule.trigger().on_scroll_sample(5010), SampleOutcome::Scheduled);
}
