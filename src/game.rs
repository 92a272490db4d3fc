//! Game orchestrator
//!
//! Owns the world state, the images and the spawn RNG. The host calls
//! [`Game::draw`] then [`Game::update`] once per animation frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::Result;
use crate::platform::input::KeyAction;
use crate::renderer::scene;
use crate::renderer::{Assets, Image, SpriteAtlas, Surface};
use crate::settings::Settings;
use crate::sim::{GameEvent, RunnerState, tick};

pub struct Game<I: Image> {
    state: RunnerState,
    assets: Assets<I>,
    atlas: SpriteAtlas,
    rng: Pcg32,
    show_hitboxes: bool,
}

impl<I: Image> Game<I> {
    /// Validate settings, build the sprite atlas and place the world
    pub fn new(settings: &Settings, assets: Assets<I>, seed: u64) -> Result<Self> {
        settings.validate()?;
        let atlas = SpriteAtlas::player()?;

        log::info!(
            "Runner initialized: canvas {}x{}, ground at {}, seed {}",
            settings.canvas_width,
            settings.canvas_height,
            settings.ground_y(),
            seed
        );

        Ok(Self {
            state: RunnerState::new(settings),
            assets,
            atlas,
            rng: Pcg32::seed_from_u64(seed),
            show_hitboxes: settings.show_hitboxes,
        })
    }

    pub fn state(&self) -> &RunnerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RunnerState {
        &mut self.state
    }

    pub fn set_show_hitboxes(&mut self, show: bool) {
        self.show_hitboxes = show;
    }

    /// Raise the player's jump intent
    pub fn request_jump(&mut self) {
        self.state.player.request_jump();
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Jump => self.request_jump(),
        }
    }

    /// Render the current state: ground, player, obstacles (back to front).
    ///
    /// Also pushes the scroll speed into the ground and obstacles. Repeated
    /// calls without an update leave the state unchanged.
    pub fn draw<S: Surface<Image = I>>(&mut self, surface: &mut S) {
        scene::draw_background(surface, &self.state.background, &self.assets.ground);
        self.state.propagate_speed_to_background();

        scene::draw_player(surface, &self.state.player, &self.atlas, &self.assets.player);

        self.state.obstacles.layout();
        scene::draw_obstacles(surface, &self.state.obstacles, &self.assets.obstacles);
        self.state.propagate_speed_to_obstacles();

        if self.show_hitboxes {
            scene::draw_hitboxes(surface, &self.state.player, &self.state.obstacles);
        }
    }

    /// Advance the simulation one frame
    pub fn update(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state, &mut self.rng)
    }

    /// One full host frame: draw, then update
    pub fn tick<S: Surface<Image = I>>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        self.draw(surface);
        self.update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::renderer::{DrawCommand, DrawList, NamedImage};

    fn assets() -> Assets<NamedImage> {
        Assets {
            ground: NamedImage::new("ground", 1200.0, 48.0),
            obstacles: NamedImage::new("obstacles", 64.0, 128.0),
            player: NamedImage::new("player", 1200.0, 913.0),
        }
    }

    fn game() -> Game<NamedImage> {
        Game::new(&Settings::default(), assets(), 42).unwrap()
    }

    #[test]
    fn test_draw_layers_back_to_front() {
        let mut game = game();
        let mut list = DrawList::new();
        game.draw(&mut list);
        assert_eq!(
            list.image_names(),
            vec!["ground", "player", "obstacles", "obstacles", "obstacles"]
        );
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut game = game();
        let mut list = DrawList::new();
        game.draw(&mut list);
        let after_first = game.state().clone();
        let first_frame = list.commands().to_vec();

        list.clear();
        game.draw(&mut list);
        assert_eq!(game.state(), &after_first);
        assert_eq!(list.commands(), first_frame.as_slice());
    }

    #[test]
    fn test_update_without_draw_does_not_scroll() {
        let mut game = game();
        game.update();
        assert_eq!(game.state().background.x, 0.0);
        assert_eq!(game.state().obstacles.x, 500.0);
    }

    #[test]
    fn test_draw_pushes_speed() {
        let mut game = game();
        game.state_mut().speed = 3.0;
        game.draw(&mut DrawList::new());
        assert_eq!(game.state().background.speed, 3.0);
        assert_eq!(game.state().obstacles.speed, 3.0);

        game.update();
        assert_eq!(game.state().background.x, -3.0);
        assert_eq!(game.state().obstacles.x, 497.0);
    }

    #[test]
    fn test_jump_through_game() {
        let mut game = game();
        let mut list = DrawList::new();
        game.handle_action(KeyAction::Jump);
        let events = game.tick(&mut list);
        assert_eq!(events, vec![GameEvent::Jumped]);
        assert_eq!(game.state().player.dy, -5.0);

        game.tick(&mut list);
        assert!(!game.state().player.is_grounded);
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = game();
        let mut b = game();
        let mut list = DrawList::new();
        for _ in 0..2000 {
            a.tick(&mut list);
            b.tick(&mut list);
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_frame_counter_stays_in_range() {
        let mut game = game();
        let mut list = DrawList::new();
        for _ in 0..350 {
            list.clear();
            game.tick(&mut list);
            let frame = game.state().frame.get();
            assert!((1..=100).contains(&frame));
        }
    }

    #[test]
    fn test_hitboxes_drawn_last() {
        let mut game = game();
        game.set_show_hitboxes(true);
        let mut list = DrawList::new();
        game.draw(&mut list);

        let fills = list
            .commands()
            .iter()
            .skip_while(|c| !matches!(c, DrawCommand::FillRect { .. }))
            .count();
        // Player plus three initial obstacles, all after the sprites
        assert_eq!(fills, 4);
        assert_eq!(list.len(), 5 + 4);
    }

    #[test]
    fn test_missing_images_skip_silently() {
        let blank = NamedImage::new("blank", 0.0, 0.0);
        let assets = Assets {
            ground: blank.clone(),
            obstacles: blank.clone(),
            player: blank,
        };
        let mut game = Game::new(&Settings::default(), assets, 1).unwrap();
        let mut list = DrawList::new();
        for _ in 0..10 {
            game.tick(&mut list);
        }
        assert!(list.is_empty());
        assert_eq!(game.state().time_ticks, 10);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            canvas_height: 20.0,
            ..Settings::default()
        };
        let result = Game::new(&settings, assets(), 1);
        assert!(matches!(result, Err(Error::InvalidSettings { field: "ground_inset", .. })));
    }
}
