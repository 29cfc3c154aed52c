use bevy::prelude::*;
use enum_map::{EnumMap, enum_map};

use crate::{
    agent::{Bot, Emotion, InteractionStatus},
    arena::Arena,
    status::ArenaStatus,
};

const BOT_RADIUS: f32 = 1.0;
const ARENA_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// Color each kind of bot is drawn with.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct BotPalette(pub EnumMap<Emotion, Color>);

impl Default for BotPalette {
    fn default() -> Self {
        Self(enum_map! {
            Emotion::Shy => Color::srgb(0.2, 0.4, 1.0),
            Emotion::Chatty => Color::srgb(0.2, 0.8, 0.2),
        })
    }
}

/// Marks the UI text showing [ArenaStatus].
#[derive(Component, Debug, Default)]
pub struct StatusText;

pub(crate) fn draw_arena(mut gizmos: Gizmos, arena: Res<Arena>) {
    gizmos.rect_2d(arena.center(), Vec2::splat(arena.size), ARENA_COLOR);
}

/// Draws every bot in its emotion color, with its interaction radius. The
/// radius is brighter while the bot is fleeing or chasing.
pub(crate) fn draw_bots(
    mut gizmos: Gizmos,
    arena: Res<Arena>,
    palette: Res<BotPalette>,
    query: Query<(&Bot, &Transform, &InteractionStatus)>,
) {
    for (bot, transform, status) in query.iter() {
        let position = transform.translation.truncate();
        let color = palette[bot.emotion];
        gizmos.circle_2d(position, BOT_RADIUS, color);
        gizmos.circle_2d(position, BOT_RADIUS * 0.5, color);

        let alpha = match status {
            InteractionStatus::Idle => 0.15,
            InteractionStatus::Fleeing | InteractionStatus::Chasing => 0.6,
        };
        gizmos.circle_2d(position, arena.interaction_radius, color.with_alpha(alpha));
    }
}

pub(crate) fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        StatusText,
        Text::new(ArenaStatus::default().to_string()),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

/// One line per kind of bot, in its color.
pub(crate) fn spawn_legend(mut commands: Commands, palette: Res<BotPalette>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(8.0),
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .with_children(|parent| {
            for (emotion, color) in palette.iter() {
                parent.spawn((Text::new(format!("{} Bot", emotion)), TextColor(*color)));
            }
        });
}

pub(crate) fn update_status_text(
    status: Res<ArenaStatus>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if !status.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        **text = status.to_string();
    }
}
