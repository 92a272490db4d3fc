//! Scene drawing: turns runner state into surface calls
//!
//! Each function reads state only. Layering is decided by the caller.

use super::sprite::SpriteAtlas;
use super::surface::{Image, Rect, Surface, colors};
use crate::consts::PLAYER_SPRITE_SIZE;
use crate::sim::{Background, ObstacleGroup, Player};

/// Ground tile at its natural size
pub fn draw_background<S: Surface>(surface: &mut S, background: &Background, ground: &S::Image) {
    let dest = Rect::from_origin_size(
        background.tile_origin(),
        glam::DVec2::new(ground.width(), ground.height()),
    );
    surface.draw_image(ground, dest);
}

/// Current animation frame, as a square sprite anchored at the player's top-left
pub fn draw_player<S: Surface>(
    surface: &mut S,
    player: &Player,
    atlas: &SpriteAtlas,
    sheet: &S::Image,
) {
    let src = atlas.frame(player.action(), player.frame_x);
    let dest = Rect::new(player.pos.x, player.pos.y, PLAYER_SPRITE_SIZE, PLAYER_SPRITE_SIZE);
    surface.draw_image_region(sheet, src, dest);
}

/// Every segment, with the whole obstacle image stretched to the segment size.
///
/// Segment positions must be current; see [`ObstacleGroup::layout`].
pub fn draw_obstacles<S: Surface>(surface: &mut S, group: &ObstacleGroup, sheet: &S::Image) {
    for segment in &group.segments {
        surface.draw_image(sheet, Rect::from_origin_size(segment.pos, segment.size()));
    }
}

/// Translucent collision boxes over the sprites
pub fn draw_hitboxes<S: Surface>(surface: &mut S, player: &Player, group: &ObstacleGroup) {
    surface.fill_rect(
        Rect::new(player.pos.x, player.pos.y, player.width, player.height),
        colors::PLAYER_HITBOX,
    );
    for segment in &group.segments {
        surface.fill_rect(
            Rect::from_origin_size(segment.pos, segment.size()),
            colors::OBSTACLE_HITBOX,
        );
    }
}
