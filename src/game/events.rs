// Deferred simulation events and presentation notifications
//
// Anything that has to happen "a little later" (a swing connecting, the
// restart prompt after the hero falls) goes through `EventQueue` instead of a
// timer callback. The queue is keyed by simulation time and drained once per
// tick.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::characters::{AnimationState, Character, CharacterId, ClipLibrary};
use super::combat::{DamageEffect, Hit, Spell};

/// Something scheduled to happen at a future simulation time
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredEvent {
    /// An attack landing on its target
    Hit(Hit),
    /// Offer a restart some time after the player died
    RestartPrompt,
}

#[derive(Debug)]
struct Scheduled {
    fire_at: f64,
    /// Insertion order, breaks ties between events due at the same time
    seq: u64,
    event: DeferredEvent,
}

impl Ord for Scheduled {
    // Reversed so the max-heap pops the earliest event first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .total_cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

/// Time-ordered queue of deferred events
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire at simulation time `fire_at`
    pub fn schedule(&mut self, fire_at: f64, event: DeferredEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled {
            fire_at,
            seq,
            event,
        });
    }

    /// Pop the earliest event if it is due at `now`
    pub fn pop_due(&mut self, now: f64) -> Option<DeferredEvent> {
        if self.heap.peek()?.fire_at > now {
            return None;
        }
        self.heap.pop().map(|scheduled| scheduled.event)
    }

    /// Fire time of the earliest pending event
    pub fn next_fire_time(&self) -> Option<f64> {
        self.heap.peek().map(|scheduled| scheduled.fire_at)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// What the presentation layer (HUD, effects, audio) needs to hear about
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    HealthChanged { id: CharacterId, health: i32 },
    /// Brief red flash on a character that just got hurt
    DamageFlash { id: CharacterId },
    /// The player's shield ate a hit
    DamageAbsorbed { id: CharacterId },
    Died { id: CharacterId },
    TurnedHostile { id: CharacterId },
    AnimationChanged { id: CharacterId, state: AnimationState },
    SpellCast { spell: Spell, remaining: u32 },
    SpellExhausted { spell: Spell },
    /// Short-lived visual on a character (fireball impact)
    EffectCue {
        id: CharacterId,
        effect: DamageEffect,
        duration: f32,
    },
    RestartRequested,
}

/// Play an animation through the gate and report it when the clip changed
pub fn animate(
    character: &mut Character,
    state: AnimationState,
    clips: &ClipLibrary,
    notifications: &mut Vec<Notification>,
) -> bool {
    let changed = character.play(state, clips);
    if changed {
        notifications.push(Notification::AnimationChanged {
            id: character.id,
            state,
        });
    }
    changed
}
