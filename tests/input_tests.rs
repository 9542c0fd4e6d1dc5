//! Input tests - key mapping and auto-repeat driving a falling game

use tile_games::core::{FallingConfig, FallingGame, SequenceRng};
use tile_games::engine::Driver;
use tile_games::input::{map_key, should_quit, InputHandler};
use tile_games::types::{Command, Point, SOFT_DROP_BOOST, TICK_MS};

fn driver() -> Driver<FallingGame<SequenceRng>> {
    // O pieces only, spawned at (4, -2)
    let game = FallingGame::new(FallingConfig::default(), SequenceRng::new(vec![5, 0, 0]));
    let mut driver = Driver::new(game);
    assert!(driver.command(Command::Resume));
    driver
}

fn feed(driver: &mut Driver<FallingGame<SequenceRng>>, handler: &mut InputHandler, ms: u32) {
    for command in handler.update(ms) {
        driver.command(command);
    }
}

#[test]
fn test_keys_map_to_commands() {
    assert_eq!(map_key('a'), Some(Command::MoveLeft));
    assert_eq!(map_key('l'), Some(Command::MoveRight));
    assert_eq!(map_key(' '), Some(Command::Rotate));
    assert_eq!(map_key('u'), Some(Command::Undo));
    assert_eq!(map_key('x'), None);
    assert!(should_quit('q'));
    assert!(!should_quit('p'));
}

#[test]
fn test_held_left_slides_to_wall() {
    let mut driver = driver();
    let mut handler = InputHandler::new();

    let first = handler.handle_press(Command::MoveLeft).unwrap();
    assert!(driver.command(first));
    assert_eq!(driver.game().current().anchor.x, 3);

    feed(&mut driver, &mut handler, 124);
    assert_eq!(driver.game().current().anchor.x, 3);
    feed(&mut driver, &mut handler, 1);
    assert_eq!(driver.game().current().anchor.x, 2);
    // second interval is 100ms, third 75ms
    feed(&mut driver, &mut handler, 100);
    assert_eq!(driver.game().current().anchor.x, 1);
    feed(&mut driver, &mut handler, 75);
    assert_eq!(driver.game().current().anchor.x, 0);

    feed(&mut driver, &mut handler, 500);
    assert_eq!(driver.game().current().anchor.x, 0);

    assert_eq!(handler.handle_release(Command::MoveLeft), None);
    assert!(handler.update(1000).is_empty());
}

#[test]
fn test_gravity_through_driver_clock() {
    let mut driver = driver();
    assert_eq!(driver.advance(25 * TICK_MS), 0);
    assert_eq!(driver.advance(TICK_MS), 1);
    assert_eq!(driver.game().current().anchor, Point::new(4, -1));
}

#[test]
fn test_held_down_soft_drops_until_release() {
    let mut driver = driver();
    let mut handler = InputHandler::new();

    let on = handler.handle_press(Command::MoveDown).unwrap();
    assert_eq!(on, Command::SoftDropOn);
    assert!(driver.command(on));
    assert_eq!(driver.advance(8 * TICK_MS), 1);

    let off = handler.handle_release(Command::MoveDown).unwrap();
    assert_eq!(off, Command::SoftDropOff);
    assert!(driver.command(off));
    assert_eq!(driver.advance(25 * TICK_MS), 0);
    assert_eq!(driver.advance(TICK_MS), 1);
}

#[test]
fn test_held_down_keeps_boost_across_lock() {
    let mut driver = driver();
    let mut handler = InputHandler::new();
    let on = handler.handle_press(Command::MoveDown).unwrap();
    assert!(driver.command(on));

    let mut slices = 0;
    loop {
        feed(&mut driver, &mut handler, TICK_MS);
        driver.advance(TICK_MS);
        if driver.game_mut().take_last_event().is_some() {
            break;
        }
        slices += 1;
        assert!(slices < 1000, "piece never locked");
    }
    // the lock itself drops the boost
    assert_eq!(driver.game().soft_drop_boost(), 0.0);
    assert!(handler.soft_drop_held());

    feed(&mut driver, &mut handler, TICK_MS);
    assert_eq!(driver.game().soft_drop_boost(), SOFT_DROP_BOOST);

    // the next piece falls at the boosted rate: 8 ticks per row
    let mut ticks = 1;
    while driver.advance(TICK_MS) == 0 {
        feed(&mut driver, &mut handler, TICK_MS);
        ticks += 1;
    }
    assert_eq!(ticks, 8);
    assert_eq!(driver.game().current().anchor, Point::new(4, -1));

    let off = handler.handle_release(Command::MoveDown).unwrap();
    assert!(driver.command(off));
    assert!(handler.update(TICK_MS).is_empty());
    assert_eq!(driver.game().soft_drop_boost(), 0.0);
}

#[test]
fn test_reset_releases_held_soft_drop() {
    let mut handler = InputHandler::new();
    handler.handle_press(Command::MoveRight);
    handler.handle_press(Command::MoveDown);
    assert_eq!(handler.reset(), Some(Command::SoftDropOff));
    assert!(!handler.soft_drop_held());
    assert!(handler.update(1000).is_empty());
}
