use std::ffi::{c_char, CStr};

use platformer_core::{Buttons, Game, GameConfig, Params, PlayerState, Rect, TickEvents};

#[no_mangle]
pub extern "C" fn core_default_params(out: *mut Params) {
    unsafe { *out = Params::default(); }
}

/// Default level and tuning. Free with `core_game_free`.
#[no_mangle]
pub extern "C" fn core_game_new() -> *mut Game {
    Box::into_raw(Box::new(Game::new(GameConfig::default())))
}

/// Build a game from explicit tuning, spawn point and platform list.
/// Returns null if any platform has a non-positive size.
#[no_mangle]
pub extern "C" fn core_game_new_with(
    params: *const Params,
    spawn_x: f32,
    spawn_y: f32,
    world_rects: *const Rect,
    world_len: usize,
) -> *mut Game {
    let p = unsafe { &*params };
    let world = unsafe { std::slice::from_raw_parts(world_rects, world_len) };

    let mut config = GameConfig {
        params: *p,
        spawn: (spawn_x, spawn_y),
        ..GameConfig::default()
    };
    config.level.platforms = world.to_vec();
    match config.validate() {
        Ok(()) => Box::into_raw(Box::new(Game::new(config))),
        Err(e) => {
            tracing::warn!(error = %e, "rejected game config");
            std::ptr::null_mut()
        }
    }
}

/// Build a game from a JSON config. Returns null on parse or validation
/// failure.
#[no_mangle]
pub extern "C" fn core_game_from_json(json: *const c_char) -> *mut Game {
    let src = unsafe { CStr::from_ptr(json) };
    let parsed = src
        .to_str()
        .map_err(|e| e.to_string())
        .and_then(|s| GameConfig::from_json(s).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => Box::into_raw(Box::new(Game::new(config))),
        Err(e) => {
            tracing::warn!(error = %e, "rejected game config");
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn core_game_free(game: *mut Game) {
    if !game.is_null() {
        drop(unsafe { Box::from_raw(game) });
    }
}

#[no_mangle]
pub extern "C" fn core_game_step(game: *mut Game, input_bits: u8) -> TickEvents {
    let g = unsafe { &mut *game };
    let buttons = Buttons::from_bits_truncate(input_bits);

    g.update(buttons)
}

#[no_mangle]
pub extern "C" fn core_game_player(game: *const Game, out: *mut PlayerState) {
    let g = unsafe { &*game };
    unsafe { *out = g.player_state(); }
}

#[no_mangle]
pub extern "C" fn core_game_platform_count(game: *const Game) -> usize {
    let g = unsafe { &*game };
    g.map().len()
}

/// Copies up to `cap` platform rects into `out`; returns how many were
/// written. A null `out` or zero `cap` writes nothing.
#[no_mangle]
pub extern "C" fn core_game_platforms(game: *const Game, out: *mut Rect, cap: usize) -> usize {
    if out.is_null() || cap == 0 {
        return 0;
    }
    let g = unsafe { &*game };
    let dst = unsafe { std::slice::from_raw_parts_mut(out, cap) };
    let mut n = 0;
    for (slot, p) in dst.iter_mut().zip(g.map().platforms()) {
        *slot = *p.rect();
        n += 1;
    }
    n
}
