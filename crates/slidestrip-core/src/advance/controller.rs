use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::timer::{AdvanceTick, TickTimer};
use crate::command::ScrollCommand;
use crate::config::AutoAdvanceConfig;
use crate::scroll_state::ScrollState;
use crate::{Error, Result};

/// Whether the auto-advance timer is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePhase {
    /// No timer running; ticks are ignored
    Idle,
    /// Timer armed, each tick advances the target index
    Running,
}

/// Timer-driven state machine that steps through items and loops at the end
///
/// The controller never touches the scroll state. It reads a snapshot on each
/// tick and answers with a [`ScrollCommand`]; the offset only changes once the
/// host surface has moved and reported back.
///
/// Lifecycle: [`mount`](Self::mount) once, [`unmount`](Self::unmount) once
/// (or drop). The timer is released on every path.
pub struct AutoAdvanceController {
    config: AutoAdvanceConfig,
    phase: AdvancePhase,
    target_index: usize,
    tick_tx: Option<mpsc::UnboundedSender<AdvanceTick>>,
    timer: Option<TickTimer>,
    unmounted: bool,
}

impl AutoAdvanceController {
    pub fn new(config: AutoAdvanceConfig) -> Self {
        Self {
            config,
            phase: AdvancePhase::Idle,
            target_index: 0,
            tick_tx: None,
            timer: None,
            unmounted: false,
        }
    }

    pub fn config(&self) -> &AutoAdvanceConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> AdvancePhase {
        self.phase
    }

    #[inline]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn is_mounted(&self) -> bool {
        self.tick_tx.is_some()
    }

    /// Whether a timer task is currently alive
    pub fn has_live_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| t.is_live())
    }

    /// Start the component's timer and hand back the tick stream
    ///
    /// The timer is always created; when auto-advance is disabled it is
    /// cancelled straight away and the controller stays `Idle`.
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> Result<mpsc::UnboundedReceiver<AdvanceTick>> {
        if self.unmounted {
            return Err(Error::Lifecycle(
                "auto-advance controller was already unmounted".to_string(),
            ));
        }
        if self.tick_tx.is_some() {
            return Err(Error::Lifecycle(
                "auto-advance controller is already mounted".to_string(),
            ));
        }

        let runtime = Handle::try_current()
            .map_err(|e| Error::Lifecycle(format!("no tokio runtime for timer: {}", e)))?;

        let (tx, rx) = mpsc::unbounded_channel();
        let timer = TickTimer::spawn(&runtime, self.config.interval(), tx.clone());
        self.tick_tx = Some(tx);

        if self.config.enabled {
            self.timer = Some(timer);
            self.phase = AdvancePhase::Running;
            info!(
                "Auto-advance running every {:.2}s",
                self.config.interval().as_secs_f64()
            );
        } else {
            timer.cancel();
            self.phase = AdvancePhase::Idle;
            info!("Auto-advance disabled, timer cancelled at mount");
        }

        Ok(rx)
    }

    /// Stop the timer for good
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.tick_tx = None;
        self.phase = AdvancePhase::Idle;
        self.unmounted = true;
        info!("Auto-advance unmounted");
    }

    /// Pause or resume auto-advance while mounted
    ///
    /// Before mount this only records the flag; after unmount it is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        if self.unmounted {
            warn!("Ignoring auto-advance toggle after unmount");
            return Ok(());
        }
        self.config.enabled = enabled;

        let Some(tx) = self.tick_tx.clone() else {
            return Ok(());
        };

        if enabled && self.timer.is_none() {
            let runtime = Handle::try_current()
                .map_err(|e| Error::Lifecycle(format!("no tokio runtime for timer: {}", e)))?;
            self.timer = Some(TickTimer::spawn(&runtime, self.config.interval(), tx));
            self.phase = AdvancePhase::Running;
            info!("Auto-advance resumed");
        } else if !enabled {
            if let Some(timer) = self.timer.take() {
                timer.cancel();
                info!("Auto-advance paused");
            }
            self.phase = AdvancePhase::Idle;
        }

        Ok(())
    }

    /// React to a timer tick, returning the scroll the surface should perform
    pub fn on_tick(&mut self, state: &ScrollState) -> Option<ScrollCommand> {
        if self.phase != AdvancePhase::Running || !self.config.enabled {
            return None;
        }

        if state.item_count() == 0 || !state.is_measured() || state.scrollable_extent() <= 0.0 {
            debug!("Auto-advance tick skipped: nothing to scroll");
            return None;
        }

        if state.is_at_end(self.config.wrap) {
            self.target_index = 0;
        } else {
            self.target_index += 1;
        }
        self.target_index = self.target_index.min(state.item_count() - 1);

        debug!(
            "Auto-advance to item {} (offset {:.2}, extent {:.2})",
            self.target_index,
            state.offset_x(),
            state.scrollable_extent()
        );
        Some(ScrollCommand::leading(self.target_index))
    }
}

impl Drop for AutoAdvanceController {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}

impl std::fmt::Debug for AutoAdvanceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoAdvanceController")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("target_index", &self.target_index)
            .field("mounted", &self.is_mounted())
            .field("unmounted", &self.unmounted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_state::WrapPolicy;
    use std::time::Duration;
    use tokio::time::timeout;

    fn config(enabled: bool) -> AutoAdvanceConfig {
        AutoAdvanceConfig {
            enabled,
            ..Default::default()
        }
    }

    /// Five 100-wide items with 8 spacing in a 108-wide viewport: the last
    /// item is the first one whose leading edge reaches the end.
    fn five_items() -> ScrollState {
        let mut state = ScrollState::new(5, 8.0);
        state.on_item_measured(100.0);
        state.on_viewport_measured(108.0);
        state
    }

    /// Stand-in for a surface that settles exactly where it is told
    fn settle(state: &mut ScrollState, command: ScrollCommand) {
        let target = state
            .item_leading_edge(command.index)
            .min(state.scrollable_extent());
        state.on_scroll_offset_changed(-target);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_enabled_runs_and_ticks() {
        let mut controller = AutoAdvanceController::new(config(true));
        let mut rx = controller.mount().unwrap();
        assert_eq!(controller.phase(), AdvancePhase::Running);
        assert!(controller.has_live_timer());

        let tick = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        assert!(tick.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_disabled_is_idle_without_timer() {
        let mut controller = AutoAdvanceController::new(config(false));
        let mut rx = controller.mount().unwrap();
        assert_eq!(controller.phase(), AdvancePhase::Idle);
        assert!(!controller.has_live_timer());

        // No ticks however long we wait
        assert!(timeout(Duration::from_secs(60), rx.recv()).await.is_err());

        let mut state = five_items();
        assert_eq!(controller.on_tick(&state), None);
        state.on_scroll_offset_changed(-50.0);
        assert_eq!(controller.on_tick(&state), None);
        assert_eq!(controller.target_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_while_running_stops_ticks() {
        let mut controller = AutoAdvanceController::new(config(true));
        let mut rx = controller.mount().unwrap();
        controller.unmount();

        assert_eq!(controller.phase(), AdvancePhase::Idle);
        assert!(!controller.has_live_timer());
        // Every sender is gone, so the stream ends instead of ticking
        let result = timeout(Duration::from_secs(60), rx.recv()).await.unwrap();
        assert_eq!(result, None);
        assert_eq!(controller.on_tick(&five_items()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_timer() {
        let mut controller = AutoAdvanceController::new(config(true));
        let mut rx = controller.mount().unwrap();
        drop(controller);

        let result = timeout(Duration::from_secs(60), rx.recv()).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_mount_twice_or_after_unmount_fails() {
        let mut controller = AutoAdvanceController::new(config(true));
        let _rx = controller.mount().unwrap();
        assert!(matches!(controller.mount(), Err(Error::Lifecycle(_))));

        controller.unmount();
        assert!(matches!(controller.mount(), Err(Error::Lifecycle(_))));
    }

    #[test]
    fn test_mount_outside_runtime_fails() {
        let mut controller = AutoAdvanceController::new(config(true));
        assert!(matches!(controller.mount(), Err(Error::Lifecycle(_))));
        assert_eq!(controller.phase(), AdvancePhase::Idle);
    }

    #[tokio::test]
    async fn test_tolerance_wider_than_extent_still_advances() {
        let mut controller = AutoAdvanceController::new(AutoAdvanceConfig {
            enabled: true,
            wrap: WrapPolicy::AtOrBeyond { tolerance: 2.0 },
            ..Default::default()
        });
        let _rx = controller.mount().unwrap();

        // 7 * 24 + 6 * 8 = 216 in a 215 viewport leaves a one-column extent
        let mut state = ScrollState::new(7, 8.0);
        state.on_item_measured(24.0);
        state.on_viewport_measured(215.0);
        assert_eq!(state.scrollable_extent(), 1.0);

        let mut indices = Vec::new();
        for _ in 0..4 {
            let command = controller.on_tick(&state).unwrap();
            indices.push(command.index);
            settle(&mut state, command);
        }
        assert_eq!(indices, vec![1, 0, 1, 0]);
    }

    #[tokio::test]
    async fn test_wraps_after_reaching_end() {
        let mut controller = AutoAdvanceController::new(config(true));
        let _rx = controller.mount().unwrap();
        let mut state = five_items();

        for expected in 1..=4 {
            let command = controller.on_tick(&state).unwrap();
            assert_eq!(command, ScrollCommand::leading(expected));
            settle(&mut state, command);
        }
        assert!(state.is_at_end(WrapPolicy::Exact));

        let command = controller.on_tick(&state).unwrap();
        assert_eq!(command.index, 0);
        settle(&mut state, command);
        assert_eq!(state.offset_x(), 0.0);

        assert_eq!(controller.on_tick(&state).unwrap().index, 1);
    }

    #[tokio::test]
    async fn test_end_reached_before_last_item() {
        // Wider viewport: item 3 can only scroll as far as the end
        let mut controller = AutoAdvanceController::new(config(true));
        let _rx = controller.mount().unwrap();
        let mut state = ScrollState::new(5, 8.0);
        state.on_item_measured(100.0);
        state.on_viewport_measured(300.0);

        let mut indices = Vec::new();
        for _ in 0..5 {
            let command = controller.on_tick(&state).unwrap();
            indices.push(command.index);
            settle(&mut state, command);
        }
        assert_eq!(indices, vec![1, 2, 3, 0, 1]);
    }

    #[tokio::test]
    async fn test_exact_policy_clamps_index_when_surface_falls_short() {
        let mut controller = AutoAdvanceController::new(AutoAdvanceConfig {
            enabled: true,
            wrap: WrapPolicy::Exact,
            ..Default::default()
        });
        let _rx = controller.mount().unwrap();
        let mut state = five_items();
        let extent = state.scrollable_extent();
        // Surface settles a fraction short of the true end
        state.on_scroll_offset_changed(-(extent - 0.3));

        for _ in 0..10 {
            let command = controller.on_tick(&state).unwrap();
            assert!(command.index <= 4);
        }
        assert_eq!(controller.target_index(), 4);
    }

    #[tokio::test]
    async fn test_tolerant_policy_wraps_on_subpixel_end() {
        let mut controller = AutoAdvanceController::new(config(true));
        let _rx = controller.mount().unwrap();
        let mut state = five_items();
        let extent = state.scrollable_extent();
        state.on_scroll_offset_changed(-(extent - 0.3));

        assert_eq!(controller.on_tick(&state).unwrap().index, 0);
    }

    #[tokio::test]
    async fn test_tick_ignored_when_content_fits() {
        let mut controller = AutoAdvanceController::new(config(true));
        let _rx = controller.mount().unwrap();
        let mut state = ScrollState::new(2, 8.0);
        state.on_item_measured(50.0);
        state.on_viewport_measured(300.0);

        assert_eq!(controller.on_tick(&state), None);
        assert_eq!(controller.target_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_and_resume() {
        let mut controller = AutoAdvanceController::new(config(false));
        let mut rx = controller.mount().unwrap();
        assert_eq!(controller.phase(), AdvancePhase::Idle);

        controller.set_enabled(true).unwrap();
        assert_eq!(controller.phase(), AdvancePhase::Running);
        assert!(timeout(Duration::from_secs(2), rx.recv()).await.unwrap().is_some());

        controller.set_enabled(false).unwrap();
        assert_eq!(controller.phase(), AdvancePhase::Idle);
        assert!(!controller.has_live_timer());
        assert_eq!(controller.on_tick(&five_items()), None);
    }
}
