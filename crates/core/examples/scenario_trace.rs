use platformer_core::{Buttons, Game, GameConfig};

fn main() {
    let mut game = Game::new(GameConfig::default());

    let mut jumped: u32 = 0;
    let mut landed: u32 = 0;
    let mut blocked: u32 = 0;

    for frame in 0..240 {
        let mut buttons = Buttons::empty();
        if frame < 90 {
            buttons |= Buttons::RIGHT;
        }
        if frame == 20 || frame == 150 {
            buttons |= Buttons::JUMP;
        }

        let ev = game.update(buttons);
        jumped += ev.jumped as u32;
        landed += ev.landed as u32;
        blocked += ev.blocked as u32;
    }

    let s = game.player_state();
    let summary = serde_json::json!({
        "x": s.x,
        "y": s.y,
        "vx": s.vx,
        "vy": s.vy,
        "grounded": s.grounded,
        "jumped": jumped,
        "landed": landed,
        "blocked": blocked,
    });
    println!("{summary}");
}
