//! Travel sequencer
//!
//! The state machine governing elevator motion. A request schedules a fixed
//! three-phase timeline (door close, travel, arrival pulse) against a
//! monotonic clock; the main loop feeds `update` the current time each frame
//! and reacts to the emitted events. Tests drive the same API with a manual
//! clock.
//!
//! There is no cancellation: an accepted sequence always runs its phases to
//! completion. Overlapping requests are rejected, not queued.

/// Door close/open animation time, independent of travel distance
pub const DOOR_CLOSE_SECS: f64 = 1.0;

/// Base travel time per floor of distance, before the speed multiplier
pub const FLOOR_TRAVEL_SECS: f64 = 2.0;

/// How long the arrival highlight stays lit after the doors open
pub const ARRIVAL_PULSE_SECS: f64 = 2.0;

/// How long the doors stay open after an arrival before closing again
pub const DOORS_OPEN_SECS: f64 = 3.5;

/// Which way the cab is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Idle,
}

/// Signals emitted as a travel sequence crosses its phase boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelEvent {
    /// Doors have closed and the cab has left; `current_level` now reads
    /// the target
    Departed { level: i32 },
    /// The cab has stopped at the target and the doors are opening
    Arrived { level: i32 },
}

/// An in-flight travel sequence
#[derive(Debug, Clone)]
struct ActiveTravel {
    from: i32,
    target: i32,
    direction: Direction,
    /// When the doors finish closing and the cab departs
    depart_at: f64,
    /// When the cab reaches the target
    arrive_at: f64,
    departed: bool,
}

/// State machine for elevator motion
#[derive(Debug)]
pub struct TravelSequencer {
    current_level: i32,
    active: Option<ActiveTravel>,
    /// End of the arrival highlight window, while one is lit
    pulse_until: Option<f64>,
    /// Most recent arrival time; drives the door open/dwell/close cycle
    arrived_at: Option<f64>,
}

impl TravelSequencer {
    pub fn new(current_level: i32) -> Self {
        Self {
            current_level,
            active: None,
            pulse_until: None,
            arrived_at: None,
        }
    }

    /// Request travel to `target`.
    ///
    /// Rejected (silent no-op, returns false) when a sequence is already
    /// active or the target is the current floor. The speed multiplier is
    /// sampled here; later changes never rescale an in-flight sequence.
    pub fn request_travel(&mut self, target: i32, speed_multiplier: f32, now: f64) -> bool {
        if self.active.is_some() || target == self.current_level {
            return false;
        }
        let from = self.current_level;
        let distance = (target - from).abs() as f64;
        let speed = f64::from(speed_multiplier).max(0.01);
        let depart_at = now + DOOR_CLOSE_SECS;
        self.arrived_at = None;
        self.active = Some(ActiveTravel {
            from,
            target,
            direction: if target > from { Direction::Up } else { Direction::Down },
            depart_at,
            arrive_at: depart_at + distance * FLOOR_TRAVEL_SECS / speed,
            departed: false,
        });
        true
    }

    /// Advance the timeline to `now`, emitting any phase boundaries crossed.
    ///
    /// Events come out in program order: a frame hitch long enough to cover
    /// both boundaries still yields `Departed` before `Arrived`.
    pub fn update(&mut self, now: f64) -> Vec<TravelEvent> {
        let mut events = Vec::new();

        if let Some(active) = self.active.as_mut() {
            if !active.departed && now >= active.depart_at {
                active.departed = true;
                self.current_level = active.target;
                events.push(TravelEvent::Departed { level: active.target });
            }
        }

        if self.active.as_ref().map_or(false, |a| now >= a.arrive_at) {
            if let Some(active) = self.active.take() {
                self.pulse_until = Some(active.arrive_at + ARRIVAL_PULSE_SECS);
                self.arrived_at = Some(active.arrive_at);
                events.push(TravelEvent::Arrived { level: active.target });
            }
        }

        if self.pulse_until.map_or(false, |until| now >= until) {
            self.pulse_until = None;
        }

        events
    }

    pub fn current_level(&self) -> i32 {
        self.current_level
    }

    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// Idle unless a sequence is active
    pub fn direction(&self) -> Direction {
        self.active.as_ref().map_or(Direction::Idle, |a| a.direction)
    }

    /// True while the arrival highlight window is lit
    pub fn just_arrived(&self, now: f64) -> bool {
        self.pulse_until.map_or(false, |until| now < until)
    }

    /// Vertical cab position in floor units, for the shaft view.
    ///
    /// Holds at the origin through the door-close phase, then interpolates
    /// linearly to the target across the travel phase.
    pub fn car_position(&self, now: f64) -> f32 {
        match &self.active {
            None => self.current_level as f32,
            Some(active) => {
                if now < active.depart_at {
                    return active.from as f32;
                }
                let duration = active.arrive_at - active.depart_at;
                let t = ((now - active.depart_at) / duration).clamp(0.0, 1.0) as f32;
                active.from as f32 + (active.target - active.from) as f32 * t
            }
        }
    }

    /// Door closure for the shaft view: 0.0 fully open, 1.0 fully shut.
    ///
    /// Doors slide shut during the door-close phase, stay shut while
    /// traveling, slide open on arrival, dwell open, then close again
    /// until the next arrival. At rest with no arrival on record they
    /// sit closed.
    pub fn door_progress(&self, now: f64) -> f32 {
        if let Some(active) = &self.active {
            if now < active.depart_at {
                let start = active.depart_at - DOOR_CLOSE_SECS;
                return (((now - start) / DOOR_CLOSE_SECS).clamp(0.0, 1.0)) as f32;
            }
            return 1.0;
        }
        if let Some(arrived) = self.arrived_at {
            let opening = 1.0 - (now - arrived) / DOOR_CLOSE_SECS;
            let dwell_end = arrived + DOORS_OPEN_SECS;
            let closing = (now - dwell_end) / DOOR_CLOSE_SECS;
            return (opening.max(closing).clamp(0.0, 1.0)) as f32;
        }
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_travel_lifecycle() {
        let mut seq = TravelSequencer::new(0);
        assert!(seq.request_travel(3, 1.0, 0.0));
        assert!(seq.is_moving());
        assert_eq!(seq.direction(), Direction::Up);
        assert_eq!(seq.current_level(), 0);

        // Door-close phase: nothing crosses yet
        assert!(seq.update(0.5).is_empty());
        assert_eq!(seq.current_level(), 0);

        // Depart strictly after the door-close delay
        assert_eq!(seq.update(1.0), vec![TravelEvent::Departed { level: 3 }]);
        assert_eq!(seq.current_level(), 3);
        assert!(seq.is_moving());

        // 3 floors at speed 1.0 = 6s of travel; arrival at t=7
        assert!(seq.update(6.9).is_empty());
        assert_eq!(seq.update(7.0), vec![TravelEvent::Arrived { level: 3 }]);
        assert!(!seq.is_moving());
        assert_eq!(seq.direction(), Direction::Idle);
        assert!(seq.just_arrived(7.5));

        // Pulse clears after its fixed window, with no event
        assert!(seq.update(7.0 + ARRIVAL_PULSE_SECS).is_empty());
        assert!(!seq.just_arrived(7.0 + ARRIVAL_PULSE_SECS));
    }

    #[test]
    fn test_current_level_updates_exactly_once() {
        let mut seq = TravelSequencer::new(2);
        seq.request_travel(5, 1.0, 0.0);
        let mut departs = 0;
        let mut t = 0.0;
        while t < 10.0 {
            for event in seq.update(t) {
                if matches!(event, TravelEvent::Departed { .. }) {
                    departs += 1;
                    assert_eq!(seq.current_level(), 5);
                }
            }
            t += 0.25;
        }
        assert_eq!(departs, 1);
    }

    #[test]
    fn test_same_floor_is_a_no_op() {
        let mut seq = TravelSequencer::new(4);
        assert!(!seq.request_travel(4, 1.0, 0.0));
        assert!(!seq.is_moving());
        assert_eq!(seq.direction(), Direction::Idle);
        assert!(seq.update(100.0).is_empty());
    }

    #[test]
    fn test_reentrant_request_is_rejected() {
        let mut seq = TravelSequencer::new(0);
        assert!(seq.request_travel(2, 1.0, 0.0));
        // A second request mid-sequence neither queues nor retargets
        assert!(!seq.request_travel(1, 1.0, 0.5));
        seq.update(1.0);
        assert_eq!(seq.current_level(), 2);
        assert_eq!(seq.update(5.0), vec![TravelEvent::Arrived { level: 2 }]);
    }

    #[test]
    fn test_travel_delay_scales_with_distance() {
        // Distance 1 at speed 1.0: arrive at 1 + 2 = 3
        let mut near = TravelSequencer::new(0);
        near.request_travel(1, 1.0, 0.0);
        near.update(1.0);
        assert!(near.update(2.99).is_empty());
        assert!(!near.update(3.0).is_empty());

        // Doubling the distance doubles the travel phase: arrive at 1 + 4 = 5
        let mut far = TravelSequencer::new(0);
        far.request_travel(2, 1.0, 0.0);
        far.update(1.0);
        assert!(far.update(4.99).is_empty());
        assert!(!far.update(5.0).is_empty());
    }

    #[test]
    fn test_travel_delay_scales_inversely_with_speed() {
        // Distance 2 at speed 2.0: arrive at 1 + 2 = 3
        let mut seq = TravelSequencer::new(0);
        seq.request_travel(2, 2.0, 0.0);
        seq.update(1.0);
        assert!(seq.update(2.99).is_empty());
        assert_eq!(seq.update(3.0), vec![TravelEvent::Arrived { level: 2 }]);
    }

    #[test]
    fn test_speed_sampled_at_request_time() {
        let mut seq = TravelSequencer::new(0);
        seq.request_travel(2, 1.0, 0.0);
        // A faster preference set mid-flight must not pull arrival earlier;
        // the original timeline (arrive at t=5) still stands
        seq.update(1.0);
        assert!(seq.update(3.0).is_empty());
        assert_eq!(seq.update(5.0), vec![TravelEvent::Arrived { level: 2 }]);
    }

    #[test]
    fn test_long_frame_emits_both_events_in_order() {
        let mut seq = TravelSequencer::new(0);
        seq.request_travel(1, 1.0, 0.0);
        let events = seq.update(60.0);
        assert_eq!(
            events,
            vec![
                TravelEvent::Departed { level: 1 },
                TravelEvent::Arrived { level: 1 },
            ]
        );
    }

    #[test]
    fn test_downward_direction() {
        let mut seq = TravelSequencer::new(5);
        seq.request_travel(1, 1.0, 0.0);
        assert_eq!(seq.direction(), Direction::Down);
    }

    #[test]
    fn test_car_position_interpolates() {
        let mut seq = TravelSequencer::new(0);
        seq.request_travel(4, 1.0, 0.0);
        // Holding at the origin while the doors close
        assert_eq!(seq.car_position(0.5), 0.0);
        seq.update(1.0);
        // 8s travel: halfway through at t=5
        assert!((seq.car_position(5.0) - 2.0).abs() < 1e-4);
        seq.update(9.0);
        assert_eq!(seq.car_position(9.0), 4.0);
    }

    #[test]
    fn test_door_progress_over_timeline() {
        let mut seq = TravelSequencer::new(0);
        // Closed at rest before any travel
        assert_eq!(seq.door_progress(0.0), 1.0);
        seq.request_travel(1, 1.0, 0.0);
        assert!((seq.door_progress(0.5) - 0.5).abs() < 1e-4);
        seq.update(1.0);
        assert_eq!(seq.door_progress(2.0), 1.0);
        // Arrival at t=3: doors open, dwell, then close again
        seq.update(3.0);
        assert!(seq.door_progress(3.1) < 1.0);
        assert_eq!(seq.door_progress(4.5), 0.0);
        assert_eq!(seq.door_progress(3.0 + DOORS_OPEN_SECS + DOOR_CLOSE_SECS), 1.0);
    }
}
