// Character animation states, clip library and the transition gate

use std::collections::HashMap;

/// Cross-fade time between the outgoing and incoming clip (seconds)
pub const FADE_DURATION: f32 = 0.1;

/// Playback speed of the hit reaction clip
pub const HIT_REACTION_TIME_SCALE: f32 = 2.0;

/// Every clip a character model can play.
///
/// The simulation only ever reasons about these tags; the presentation layer
/// maps them to clip names through [`AnimationState::clip_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    Idle,
    Jogging,
    Walking,
    SwordIdle,
    SwordSlash,
    FightJab,
    PistolAim,
    PistolIdle,
    PistolReady,
    PistolFire,
    TakeDamage,
    Die,
}

impl AnimationState {
    pub const ALL: [AnimationState; 12] = [
        Self::Idle,
        Self::Jogging,
        Self::Walking,
        Self::SwordIdle,
        Self::SwordSlash,
        Self::FightJab,
        Self::PistolAim,
        Self::PistolIdle,
        Self::PistolReady,
        Self::PistolFire,
        Self::TakeDamage,
        Self::Die,
    ];

    /// Clip name inside the character asset
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Jogging => "Jogging",
            Self::Walking => "Walking",
            Self::SwordIdle => "Sword Idle",
            Self::SwordSlash => "Sword Slash",
            Self::FightJab => "Fight Jab",
            Self::PistolAim => "Pistol Aim",
            Self::PistolIdle => "Pistol Idle",
            Self::PistolReady => "Pistol Ready",
            Self::PistolFire => "Pistol Fire",
            Self::TakeDamage => "Take Damage",
            Self::Die => "Die",
        }
    }

    /// Reverse of [`clip_name`](Self::clip_name)
    pub fn from_clip_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.clip_name() == name)
    }

    /// Low priority clips that anything may interrupt
    pub fn is_basic(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::Jogging | Self::Walking | Self::PistolAim | Self::PistolIdle
        )
    }

    /// Actions that must finish before a basic clip can take over
    pub fn is_medium(&self) -> bool {
        matches!(
            self,
            Self::PistolFire | Self::FightJab | Self::SwordSlash | Self::TakeDamage
        )
    }

    /// Attack swings, which hit reactions cannot interrupt
    pub fn is_attack(&self) -> bool {
        matches!(self, Self::PistolFire | Self::FightJab | Self::SwordSlash)
    }

    /// Clips that play once and hold their last frame
    pub fn is_one_shot(&self) -> bool {
        matches!(
            self,
            Self::SwordSlash | Self::PistolFire | Self::FightJab | Self::TakeDamage | Self::Die
        )
    }

    /// Stances from which a new attack may start
    pub fn is_idle_equivalent(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::SwordIdle | Self::PistolReady | Self::PistolAim
        )
    }

    /// Clip to return to once this one-shot finishes
    pub fn follow_up(&self) -> Option<AnimationState> {
        match self {
            Self::SwordSlash | Self::FightJab | Self::TakeDamage => Some(Self::SwordIdle),
            Self::PistolFire => Some(Self::PistolReady),
            _ => None,
        }
    }

    /// Playback speed multiplier
    pub fn time_scale(&self) -> f32 {
        match self {
            Self::TakeDamage => HIT_REACTION_TIME_SCALE,
            _ => 1.0,
        }
    }
}

/// Whether `requested` may replace `current`.
///
/// Death is terminal, swings shrug off hit reactions, and medium priority
/// actions have to play out before the character falls back to a basic clip.
pub fn can_transition(current: AnimationState, requested: AnimationState) -> bool {
    if current == AnimationState::Die {
        return false;
    }
    if current.is_attack() && requested == AnimationState::TakeDamage {
        return false;
    }
    if current.is_basic() {
        return true;
    }
    if requested.is_basic() && current.is_medium() {
        return false;
    }
    true
}

/// A clip available in the character asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub state: AnimationState,
    /// Length of one cycle at normal speed (seconds)
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(state: AnimationState, duration: f32) -> Self {
        Self { state, duration }
    }
}

/// Registry of the clips the loaded character asset provides
#[derive(Debug, Clone, Default)]
pub struct ClipLibrary {
    clips: HashMap<AnimationState, AnimationClip>,
}

impl ClipLibrary {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
        }
    }

    /// The clip set shipped with the character asset
    pub fn with_standard_clips() -> Self {
        let mut library = Self::new();
        library.add_clip(AnimationClip::new(AnimationState::Idle, 2.0));
        library.add_clip(AnimationClip::new(AnimationState::Jogging, 0.8));
        library.add_clip(AnimationClip::new(AnimationState::Walking, 1.0));
        library.add_clip(AnimationClip::new(AnimationState::SwordIdle, 2.0));
        library.add_clip(AnimationClip::new(AnimationState::SwordSlash, 1.0));
        library.add_clip(AnimationClip::new(AnimationState::FightJab, 0.8));
        library.add_clip(AnimationClip::new(AnimationState::PistolAim, 1.5));
        library.add_clip(AnimationClip::new(AnimationState::PistolIdle, 2.0));
        library.add_clip(AnimationClip::new(AnimationState::PistolReady, 1.5));
        library.add_clip(AnimationClip::new(AnimationState::PistolFire, 0.6));
        library.add_clip(AnimationClip::new(AnimationState::TakeDamage, 1.0));
        library.add_clip(AnimationClip::new(AnimationState::Die, 2.5));
        library
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.state, clip);
    }

    pub fn get(&self, state: AnimationState) -> Option<&AnimationClip> {
        self.clips.get(&state)
    }

    pub fn contains(&self, state: AnimationState) -> bool {
        self.clips.contains_key(&state)
    }
}

/// How the active clip repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Loop,
    /// Play once and clamp on the last frame
    Once,
}

/// Per-character playback of the clip library
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    active: Option<AnimationState>,
    previous: Option<AnimationState>,
    /// Clip-local time of the active clip
    elapsed: f32,
    time_scale: f32,
    mode: PlayMode,
    /// Time since the last switch, drives the cross-fade
    since_switch: f32,
    finished: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            active: None,
            previous: None,
            elapsed: 0.0,
            time_scale: 1.0,
            mode: PlayMode::Loop,
            since_switch: 0.0,
            finished: false,
        }
    }

    /// Ask to play `requested`. Returns true when the clip actually changed.
    pub fn request(&mut self, requested: AnimationState, library: &ClipLibrary) -> bool {
        if self.active == Some(requested) {
            return false;
        }
        if !library.contains(requested) {
            log::warn!("Animation \"{}\" not found", requested.clip_name());
            return false;
        }
        if let Some(current) = self.active {
            if !can_transition(current, requested) {
                return false;
            }
        }

        self.previous = self.active;
        self.active = Some(requested);
        self.elapsed = 0.0;
        self.since_switch = 0.0;
        self.finished = false;
        self.time_scale = requested.time_scale();
        self.mode = if requested.is_one_shot() {
            PlayMode::Once
        } else {
            PlayMode::Loop
        };
        true
    }

    /// Request a clip by its asset name; unknown names are logged and ignored
    pub fn request_by_name(&mut self, name: &str, library: &ClipLibrary) -> bool {
        match AnimationState::from_clip_name(name) {
            Some(state) => self.request(state, library),
            None => {
                log::warn!("Animation \"{}\" not found", name);
                false
            }
        }
    }

    /// Advance playback. Returns the one-shot clip that finished during this step, if any.
    pub fn update(&mut self, dt: f32, library: &ClipLibrary) -> Option<AnimationState> {
        let state = self.active?;
        self.since_switch = (self.since_switch + dt).min(FADE_DURATION);

        if self.finished {
            return None;
        }
        let duration = library.get(state).map(|clip| clip.duration)?;

        self.elapsed += dt * self.time_scale;
        match self.mode {
            PlayMode::Loop => {
                if duration > 0.0 {
                    self.elapsed %= duration;
                }
                None
            }
            PlayMode::Once => {
                if self.elapsed >= duration {
                    self.elapsed = duration;
                    self.finished = true;
                    Some(state)
                } else {
                    None
                }
            }
        }
    }

    pub fn active(&self) -> Option<AnimationState> {
        self.active
    }

    /// Weight of the active clip in the cross-fade; the previous clip gets the rest
    #[allow(dead_code)]
    pub fn blend_weight(&self) -> f32 {
        if self.previous.is_none() {
            return 1.0;
        }
        (self.since_switch / FADE_DURATION).min(1.0)
    }

    /// Whether the character may start an attack from its current clip
    pub fn is_idle_equivalent(&self) -> bool {
        self.active.is_some_and(|state| state.is_idle_equivalent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use AnimationState::*;

    fn playing(state: AnimationState) -> (AnimationPlayer, ClipLibrary) {
        let library = ClipLibrary::with_standard_clips();
        let mut player = AnimationPlayer::new();
        player.request(state, &library);
        (player, library)
    }

    #[test]
    fn test_clip_names_round_trip() {
        for state in AnimationState::ALL {
            assert_eq!(AnimationState::from_clip_name(state.clip_name()), Some(state));
        }
        assert_eq!(AnimationState::from_clip_name("Backflip"), None);
    }

    #[test]
    fn test_die_is_terminal() {
        for state in AnimationState::ALL {
            assert!(!can_transition(Die, state));
        }
    }

    #[test]
    fn test_attacks_ignore_hit_reactions() {
        assert!(!can_transition(SwordSlash, TakeDamage));
        assert!(!can_transition(FightJab, TakeDamage));
        assert!(!can_transition(PistolFire, TakeDamage));
        // But dying still interrupts a swing
        assert!(can_transition(SwordSlash, Die));
    }

    #[test]
    fn test_basic_clips_accept_everything() {
        assert!(can_transition(Idle, SwordSlash));
        assert!(can_transition(Walking, TakeDamage));
        assert!(can_transition(PistolAim, Die));
        assert!(can_transition(Jogging, Idle));
    }

    #[test]
    fn test_medium_blocks_basic() {
        assert!(!can_transition(SwordSlash, Walking));
        assert!(!can_transition(TakeDamage, Idle));
        assert!(!can_transition(PistolFire, PistolAim));
        // Non-basic stances are still allowed
        assert!(can_transition(TakeDamage, SwordIdle));
        assert!(can_transition(PistolFire, PistolReady));
    }

    #[test]
    fn test_stances_are_not_basic() {
        assert!(can_transition(SwordIdle, Walking));
        assert!(can_transition(PistolReady, TakeDamage));
        assert!(can_transition(SwordIdle, SwordSlash));
    }

    #[test]
    fn test_same_clip_is_noop() {
        let (mut player, library) = playing(Walking);
        player.update(0.5, &library);
        assert!(!player.request(Walking, &library));
        assert_abs_diff_eq!(player.elapsed, 0.5);
    }

    #[test]
    fn test_request_tracks_previous() {
        let (mut player, library) = playing(Idle);
        assert!(player.request(SwordIdle, &library));
        assert_eq!(player.active(), Some(SwordIdle));
        assert_eq!(player.previous, Some(Idle));
    }

    #[test]
    fn test_missing_clip_is_noop() {
        let mut library = ClipLibrary::new();
        library.add_clip(AnimationClip::new(Idle, 2.0));
        let mut player = AnimationPlayer::new();
        player.request(Idle, &library);

        assert!(!player.request(Jogging, &library));
        assert_eq!(player.active(), Some(Idle));
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let (mut player, library) = playing(Idle);
        assert!(!player.request_by_name("Moonwalk", &library));
        assert_eq!(player.active(), Some(Idle));

        assert!(player.request_by_name("Sword Slash", &library));
        assert_eq!(player.active(), Some(SwordSlash));
    }

    #[test]
    fn test_one_shot_finishes_and_clamps() {
        let (mut player, library) = playing(SwordSlash);
        assert_eq!(player.mode, PlayMode::Once);

        assert_eq!(player.update(0.5, &library), None);
        assert_eq!(player.update(0.75, &library), Some(SwordSlash));
        assert!(player.finished);
        assert_abs_diff_eq!(player.elapsed, 1.0);

        // Reports completion only once
        assert_eq!(player.update(0.5, &library), None);
    }

    #[test]
    fn test_hit_reaction_plays_double_speed() {
        let (mut player, library) = playing(TakeDamage);
        assert_abs_diff_eq!(player.time_scale, 2.0);
        // 1.0s clip at 2x finishes after 0.5s
        assert_eq!(player.update(0.25, &library), None);
        assert_eq!(player.update(0.25, &library), Some(TakeDamage));
    }

    #[test]
    fn test_loops_wrap() {
        let (mut player, library) = playing(Walking);
        assert_eq!(player.mode, PlayMode::Loop);
        assert_eq!(player.update(1.25, &library), None);
        assert_abs_diff_eq!(player.elapsed, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_cross_fade_weight() {
        let (mut player, library) = playing(Idle);
        assert_abs_diff_eq!(player.blend_weight(), 1.0);

        player.request(Walking, &library);
        assert_abs_diff_eq!(player.blend_weight(), 0.0);
        player.update(0.05, &library);
        assert_abs_diff_eq!(player.blend_weight(), 0.5, epsilon = 1e-5);
        player.update(0.5, &library);
        assert_abs_diff_eq!(player.blend_weight(), 1.0);
    }

    #[test]
    fn test_follow_ups() {
        assert_eq!(SwordSlash.follow_up(), Some(SwordIdle));
        assert_eq!(FightJab.follow_up(), Some(SwordIdle));
        assert_eq!(TakeDamage.follow_up(), Some(SwordIdle));
        assert_eq!(PistolFire.follow_up(), Some(PistolReady));
        assert_eq!(Die.follow_up(), None);
        assert_eq!(Walking.follow_up(), None);
    }

    #[test]
    fn test_idle_equivalent() {
        let (mut player, library) = playing(Idle);
        assert!(player.is_idle_equivalent());
        player.request(Walking, &library);
        assert!(!player.is_idle_equivalent());
        player.request(PistolReady, &library);
        assert!(player.is_idle_equivalent());
        assert!(!AnimationPlayer::new().is_idle_equivalent());
    }
}
