use battleship_field::{BoardError, Orientation, Ship};

#[test]
fn test_horizontal_decks() -> Result<(), BoardError> {
    let ship = Ship::new((2, 0), (2, 3))?;
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    let cells: Vec<_> = ship.decks().iter().map(|d| d.position()).collect();
    assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert!(ship.decks().iter().all(|d| d.is_alive()));
    Ok(())
}

#[test]
fn test_vertical_decks() -> Result<(), BoardError> {
    let ship = Ship::new((6, 0), (8, 0))?;
    assert_eq!(ship.orientation(), Orientation::Vertical);
    let cells: Vec<_> = ship.decks().iter().map(|d| d.position()).collect();
    assert_eq!(cells, vec![(6, 0), (7, 0), (8, 0)]);
    Ok(())
}

#[test]
fn test_reversed_endpoints_are_normalized() -> Result<(), BoardError> {
    let ship = Ship::new((2, 3), (2, 0))?;
    assert_eq!(ship.len(), 4);
    assert_eq!(ship.start(), (2, 0));
    assert_eq!(ship.end(), (2, 3));

    let ship = Ship::new((8, 5), (6, 5))?;
    let rows: Vec<_> = ship.decks().iter().map(|d| d.row()).collect();
    assert_eq!(rows, vec![6, 7, 8]);
    Ok(())
}

#[test]
fn test_single_deck_ship() -> Result<(), BoardError> {
    let mut ship = Ship::new((9, 9), (9, 9))?;
    assert_eq!(ship.len(), 1);
    assert!(!ship.is_sunk());
    assert!(ship.fire(9, 9));
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_diagonal_is_rejected() {
    assert_eq!(
        Ship::new((0, 0), (1, 1)).unwrap_err(),
        BoardError::InvalidShipShape {
            start: (0, 0),
            end: (1, 1)
        }
    );
}

#[test]
fn test_get_deck() -> Result<(), BoardError> {
    let ship = Ship::new((4, 5), (4, 6))?;
    assert_eq!(ship.deck(4, 5).map(|d| d.position()), Some((4, 5)));
    assert!(ship.deck(4, 6).is_some());
    assert!(ship.deck(4, 4).is_none());
    assert!(ship.deck(5, 5).is_none());
    Ok(())
}

#[test]
fn test_fire_and_sunk() -> Result<(), BoardError> {
    let mut ship = Ship::new((6, 4), (6, 6))?;
    assert!(!ship.fire(0, 0));
    assert!(ship.fire(6, 4));
    assert!(!ship.is_sunk());
    // dead deck
    assert!(!ship.fire(6, 4));
    assert!(ship.fire(6, 5));
    assert!(ship.fire(6, 6));
    assert!(ship.is_sunk());
    assert_eq!(ship.decks_alive(), 0);
    assert!(ship.decks().iter().all(|d| !d.is_alive()));
    // sunk flag belongs to the board
    assert!(!ship.is_marked_sunk());
    Ok(())
}

#[test]
fn test_off_grid_endpoint_rejected() {
    assert_eq!(
        Ship::new((0, 0), (0, usize::MAX)).unwrap_err(),
        BoardError::ShipOutOfBounds {
            row: 0,
            col: usize::MAX
        }
    );
    assert_eq!(
        Ship::new((10, 2), (3, 2)).unwrap_err(),
        BoardError::ShipOutOfBounds { row: 10, col: 2 }
    );
    // shape is checked first
    assert!(matches!(
        Ship::new((0, 0), (20, 20)),
        Err(BoardError::InvalidShipShape { .. })
    ));
}
