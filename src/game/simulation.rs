// Per-tick orchestration of the player and every AI character
//
// One `tick` runs, in order: deferred events that are due, the player, each AI
// character in roster order, then animation timing. Later steps see what the
// earlier ones did this tick.

use glam::{Vec2, Vec3};

use super::characters::{AnimationState, CharacterId, ClipLibrary, Roster, Template, PLAYER_ID};
use super::combat::{
    apply_hit, cast, check_aggro, engage, find_nearest, start_attack, AttackProfile,
    CombatContext, DamageOutcome, Spell, SpellBook,
};
use super::events::{animate, DeferredEvent, EventQueue, Notification};
use super::level::LevelData;
use super::movement::move_toward;

/// How far ahead of the player a held movement key puts the destination
pub const KEY_STEP: f32 = 0.5;
/// The player counts as arrived within this distance of the destination
pub const ARRIVAL_DISTANCE: f32 = 0.05;
/// Fastest the player turns while walking (radians/second)
pub const TURN_RATE: f32 = 10.0;
/// Time between the player's death and the restart prompt (seconds)
pub const RESTART_DELAY: f64 = 2.0;

/// Player input gathered for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Held movement keys: x to the right (+X), y toward the camera (+Z)
    pub direction: Vec2,
    /// Stun key went down this tick
    pub cast_stun: bool,
    /// Shield key went down this tick
    pub cast_shield: bool,
}

impl InputSnapshot {
    /// Spells triggered this tick, stun first
    pub fn casts(&self) -> impl Iterator<Item = Spell> {
        [(Spell::Stun, self.cast_stun), (Spell::Shield, self.cast_shield)]
            .into_iter()
            .filter_map(|(spell, triggered)| triggered.then_some(spell))
    }
}

/// The whole fight: roster, clip registry, pending events and the clock
#[derive(Debug)]
pub struct Simulation {
    roster: Roster,
    clips: ClipLibrary,
    queue: EventQueue,
    spells: SpellBook,
    notifications: Vec<Notification>,
    /// Simulation clock (seconds)
    time: f64,
}

impl Simulation {
    /// Empty simulation; spawn the player first
    pub fn new(clips: ClipLibrary, spells: SpellBook) -> Self {
        Self {
            roster: Roster::new(),
            clips,
            queue: EventQueue::new(),
            spells,
            notifications: Vec::new(),
            time: 0.0,
        }
    }

    /// Build the roster a level describes
    pub fn from_level(level: &LevelData) -> Self {
        let mut sim = Self::new(ClipLibrary::with_standard_clips(), level.player.spell_book());
        for entry in &level.characters {
            let id = sim.spawn(entry.template, entry.position());
            if let (Some(pose), Some(character)) = (&entry.pose, sim.roster.get_mut(id)) {
                character.animation.request_by_name(pose, &sim.clips);
            }
        }
        if let (Some(health), Some(player)) = (level.player.health, sim.roster.player_mut()) {
            player.health = health;
        }
        sim
    }

    pub fn spawn(&mut self, template: Template, position: Vec3) -> CharacterId {
        self.roster.spawn(template, position, &self.clips)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn spells(&self) -> &SpellBook {
        &self.spells
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Fire time of the next pending deferred event
    pub fn next_event_time(&self) -> Option<f64> {
        self.queue.next_fire_time()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Send the player walking to a point, or stop with `None`
    pub fn set_destination(&mut self, destination: Option<Vec3>) {
        match self.roster.player_mut() {
            Some(player) => player.destination = destination,
            None => log::warn!("No player to move"),
        }
    }

    /// Advance the fight by `delta` seconds.
    ///
    /// Returns the notifications raised during the tick, in the order they
    /// happened.
    pub fn tick(&mut self, delta: f32, input: &InputSnapshot) -> Vec<Notification> {
        if self.roster.is_empty() {
            log::warn!("Tick on an empty roster, skipping");
            return Vec::new();
        }

        self.time += f64::from(delta);
        self.fire_due_events();
        self.update_player(delta, input);
        for id in 1..self.roster.len() {
            self.update_ai(id, delta);
        }
        self.update_animations(delta);

        std::mem::take(&mut self.notifications)
    }

    fn fire_due_events(&mut self) {
        while let Some(event) = self.queue.pop_due(self.time) {
            match event {
                DeferredEvent::Hit(hit) => {
                    let outcome =
                        apply_hit(&mut self.roster, &self.clips, &hit, &mut self.notifications);
                    if outcome == DamageOutcome::Killed && hit.target == PLAYER_ID {
                        log::info!("The hero has fallen");
                        self.queue
                            .schedule(self.time + RESTART_DELAY, DeferredEvent::RestartPrompt);
                    }
                }
                DeferredEvent::RestartPrompt => {
                    log::info!("Restart requested");
                    self.notifications.push(Notification::RestartRequested);
                }
            }
        }
    }

    fn update_player(&mut self, delta: f32, input: &InputSnapshot) {
        if !self.roster.player().is_some_and(|p| p.is_alive()) {
            return;
        }

        for spell in input.casts() {
            cast(&mut self.roster, spell, &mut self.spells, &mut self.notifications);
        }

        let Some(player) = self.roster.player_mut() else {
            return;
        };

        let direction = input.direction.normalize_or_zero();
        if direction != Vec2::ZERO {
            let step = Vec3::new(direction.x, 0.0, direction.y) * KEY_STEP;
            player.destination = Some(player.position + step);
        }

        player.cool_down(delta);
        player.tick_effects(delta);

        if let Some(destination) = player.destination {
            if player.distance_to(destination) > ARRIVAL_DISTANCE {
                player.turn_towards(destination, TURN_RATE * delta);
            }
            if move_toward(player, destination, ARRIVAL_DISTANCE, delta) {
                player.destination = None;
                animate(player, AnimationState::SwordIdle, &self.clips, &mut self.notifications);
            } else {
                animate(player, AnimationState::Walking, &self.clips, &mut self.notifications);
            }
            return;
        }

        if !player.can_attack() {
            return;
        }
        let Some(target) = find_nearest(PLAYER_ID, &self.roster) else {
            return;
        };
        let Some(profile) = AttackProfile::for_player(target.distance) else {
            return;
        };
        let Some(target_position) = self.roster.get(target.id).map(|c| c.position) else {
            return;
        };

        let mut ctx = CombatContext {
            clips: &self.clips,
            queue: &mut self.queue,
            notifications: &mut self.notifications,
            now: self.time,
        };
        if let Some(player) = self.roster.player_mut() {
            start_attack(player, target.id, target_position, profile, &mut ctx);
        }
    }

    fn update_ai(&mut self, id: CharacterId, delta: f32) {
        let Some((player_position, player_alive)) =
            self.roster.player().map(|p| (p.position, p.is_alive()))
        else {
            return;
        };

        let hostile = match self.roster.get_mut(id) {
            Some(character) if character.is_alive() => {
                character.tick_effects(delta);
                character.status.is_hostile()
            }
            _ => return,
        };

        if !hostile {
            check_aggro(&mut self.roster, id, &self.clips, &mut self.notifications);
            return;
        }

        let Some(character) = self.roster.get_mut(id) else {
            return;
        };
        character.face(player_position);
        character.cool_down(delta);

        if !player_alive {
            if character.current_animation() == Some(AnimationState::Walking) {
                animate(character, AnimationState::SwordIdle, &self.clips, &mut self.notifications);
            }
            return;
        }

        let profile = AttackProfile::for_ai(character.combat_type);
        let mut ctx = CombatContext {
            clips: &self.clips,
            queue: &mut self.queue,
            notifications: &mut self.notifications,
            now: self.time,
        };
        let engagement = engage(character, PLAYER_ID, player_position, profile, delta, &mut ctx);
        log::trace!("#{} {:?}", id, engagement);
    }

    fn update_animations(&mut self, delta: f32) {
        for character in self.roster.all_mut() {
            if let Some(state) = character.update_animation(delta, &self.clips) {
                self.notifications.push(Notification::AnimationChanged {
                    id: character.id,
                    state,
                });
            }
        }
    }
}
