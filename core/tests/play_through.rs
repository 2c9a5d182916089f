use flowers_core::*;

const CELL: f64 = 18.0;
const RECT: SurfaceRect = SurfaceRect {
    left: 8.0,
    top: 8.0,
};

fn at(coords: Coord2, kind: PointerKind, button: Option<PointerButton>) -> PointerSample {
    let buttons = match (kind, button) {
        (PointerKind::Press, Some(PointerButton::Primary)) => PointerButtons::PRIMARY,
        (PointerKind::Press, Some(PointerButton::Secondary)) => PointerButtons::SECONDARY,
        _ => PointerButtons::empty(),
    };
    PointerSample {
        x: RECT.left + (f64::from(coords.0) - 0.5) * CELL,
        y: RECT.top + (f64::from(coords.1) - 0.5) * CELL,
        kind,
        button,
        buttons,
    }
}

fn click<P: FlowerPlacer>(
    reducer: &mut InputReducer,
    game: &mut Game<P>,
    coords: Coord2,
    button: PointerButton,
) -> bool {
    reducer
        .reduce(game, at(coords, PointerKind::Press, Some(button)), RECT)
        .unwrap();
    reducer
        .reduce(game, at(coords, PointerKind::Release, Some(button)), RECT)
        .unwrap()
}

/// Uncovers every safe cell the way a player would, flagging the rest.
#[test]
fn random_board_can_be_cleared_by_pointer() {
    let config = GameConfig::default();
    let mut game = Game::new(config, RandomPlacer::from_seed(2024));
    let mut reducer = InputReducer::new(config.size(), CELL);

    assert!(click(&mut reducer, &mut game, (10, 7), PointerButton::Primary));
    assert!(game.grid().placement_done());
    assert!(!game.grid()[(10, 7)].has_flower);

    let flowers: Vec<_> = game
        .grid()
        .coords()
        .filter(|&pos| game.grid()[pos].has_flower)
        .collect();
    assert_eq!(flowers.len(), 40);

    for &coords in &flowers {
        click(&mut reducer, &mut game, coords, PointerButton::Secondary);
    }
    assert_eq!(game.flowers_left(), 0);

    let safe: Vec<_> = game
        .grid()
        .coords()
        .filter(|&pos| !game.grid()[pos].has_flower)
        .collect();
    for coords in safe {
        if game.is_over() {
            break;
        }
        click(&mut reducer, &mut game, coords, PointerButton::Primary);
    }

    assert!(game.is_won());
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn losing_then_clicking_starts_a_new_game() {
    let config = GameConfig::new((4, 4), 2).unwrap();
    let mut game = Game::new(config, PresetPlacer::new([(4, 4), (1, 4)]));
    let mut reducer = InputReducer::new(config.size(), CELL);

    click(&mut reducer, &mut game, (1, 1), PointerButton::Primary);
    assert_eq!(game.status(), GameStatus::InProgress);

    click(&mut reducer, &mut game, (4, 4), PointerButton::Primary);
    assert_eq!(game.status(), GameStatus::Lost);

    let visuals: Vec<_> = frame(game.grid(), reducer.selection()).collect();
    let flower_overlays = visuals
        .iter()
        .filter(|(_, visual)| visual.overlay == Some(Overlay::Flower))
        .count();
    assert_eq!(flower_overlays, 2);

    click(&mut reducer, &mut game, (2, 2), PointerButton::Secondary);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.grid().placement_done());
    assert_eq!(game.grid().count_visibility(Visibility::Covered), 16);
}

#[test]
fn hovering_redraws_only_on_cell_change() {
    let config = GameConfig::default();
    let mut game = Game::new(config, RandomPlacer::from_seed(5));
    let mut reducer = InputReducer::new(config.size(), CELL);

    let mut redraws = 0;
    for step in 0..(18 * 3u32) {
        let sample = PointerSample {
            x: RECT.left + f64::from(step),
            y: RECT.top + 1.0,
            kind: PointerKind::Move,
            button: None,
            buttons: PointerButtons::empty(),
        };
        if reducer.reduce(&mut game, sample, RECT).unwrap() {
            redraws += 1;
        }
    }

    assert_eq!(redraws, 3);
    assert_eq!(reducer.selection().cell, Some((3, 1)));

    let highlighted = frame(game.grid(), reducer.selection())
        .filter(|(_, visual)| visual.base == Base::CoveredHighlighted)
        .map(|(coords, _)| coords)
        .collect::<Vec<_>>();
    assert_eq!(highlighted, [(3, 1)]);
}

#[test]
fn press_released_off_the_board_does_not_stick() {
    let config = GameConfig::default();
    let mut game = Game::new(config, RandomPlacer::from_seed(9));
    let mut reducer = InputReducer::new(config.size(), CELL);

    let press = at((2, 2), PointerKind::Press, Some(PointerButton::Primary));
    reducer.reduce(&mut game, press, RECT).unwrap();
    let pressed = frame(game.grid(), reducer.selection())
        .find(|&(coords, _)| coords == (2, 2))
        .map(|(_, visual)| visual.base);
    assert_eq!(pressed, Some(Base::Uncovered));

    reducer
        .reduce(&mut game, at((2, 2), PointerKind::Leave, None), RECT)
        .unwrap();
    reducer
        .reduce(&mut game, at((5, 5), PointerKind::Enter, None), RECT)
        .unwrap();

    let uncovered_looking = frame(game.grid(), reducer.selection())
        .filter(|(_, visual)| visual.base == Base::Uncovered)
        .count();
    assert_eq!(uncovered_looking, 0);
    assert!(!game.grid().placement_done());
}
