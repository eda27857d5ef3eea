//! Plain-text rendering of the engine's read model.

use strictly_grid::{GameView, Placement, Player, Square, Variant};
use tracing::instrument;

/// One-character board symbols for both players.
///
/// Each player is shown by the first character of its label. When the two
/// labels start alike (or one is empty) the board falls back to `A` and `B`.
fn symbols(variant: &Variant) -> [String; 2] {
    let initial = |player| variant.label(player).chars().next();
    match (initial(Player::A), initial(Player::B)) {
        (Some(first), Some(second)) if first != second => {
            [first.to_string(), second.to_string()]
        }
        _ => ["A".to_string(), "B".to_string()],
    }
}

/// Renders the board, bracketing the winning line.
///
/// Free-placement boards show empty squares by index so a player knows
/// what to type; gravity boards get a column footer instead.
#[instrument(skip_all)]
pub fn render_board(view: &GameView, variant: &Variant) -> String {
    let board = view.board();
    let dims = board.dimensions();
    let free = *variant.placement() == Placement::Free;
    let [first, second] = symbols(variant);

    let mut rows = Vec::with_capacity(dims.height);
    for row in 0..dims.height {
        let cells: Vec<String> = (0..dims.width)
            .map(|col| {
                let index = dims.index_of(row, col);
                let square = board.get(index).unwrap_or(Square::Empty);
                let text = match square {
                    Square::Empty if free => index.to_string(),
                    Square::Empty => ".".to_string(),
                    Square::Occupied(Player::A) => first.clone(),
                    Square::Occupied(Player::B) => second.clone(),
                };
                if view.is_highlighted(index) {
                    format!("[{}]", text)
                } else {
                    format!(" {} ", text)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    let separator = vec!["---"; dims.width].join("+");
    let mut out = rows.join(&format!("\n{}\n", separator));
    if !free {
        let footer: Vec<String> = (0..dims.width).map(|c| format!(" {} ", c)).collect();
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&footer.join(" "));
    }
    out
}

/// Renders the move list, marking the viewed step with `>`.
pub fn render_moves(view: &GameView) -> String {
    view.moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.current() { ">" } else { " " };
            format!("{} {:>2}. {}", marker, entry.step(), entry.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders board, status, order flag and move list.
#[instrument(skip_all)]
pub fn render_view(view: &GameView, variant: &Variant) -> String {
    let order = if *view.ascending() { "Ascending" } else { "Descending" };
    format!(
        "{}\n\n{}\nMoves ({}):\n{}\n",
        render_board(view, variant),
        view.status_text(),
        order,
        render_moves(view)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_grid::{GameState, Intent, Labels};

    #[test]
    fn test_tic_tac_toe_board() {
        let variant = Variant::tic_tac_toe();
        let game = GameState::replay(variant.clone(), [4, 0].map(Intent::Move));
        let text = render_board(&game.view(), &variant);
        assert_eq!(
            text,
            " O | 1 | 2 \n---+---+---\n 3 | X | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let variant = Variant::tic_tac_toe();
        let game = GameState::replay(variant.clone(), [0, 4, 1, 3, 2].map(Intent::Move));
        let text = render_board(&game.view(), &variant);
        assert!(text.starts_with("[X]|[X]|[X]"));
    }

    #[test]
    fn test_gravity_board_has_column_footer() {
        let variant = Variant::connect_four();
        let game = GameState::replay(variant.clone(), [3].map(Intent::Move));
        let text = render_board(&game.view(), &variant);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.last().copied(), Some(" 0   1   2   3   4   5   6 "));
        assert!(lines[10].contains(" B "));
    }

    #[test]
    fn test_clashing_initials_fall_back_to_player_letters() {
        let variant = Variant::connect_four().with_labels(Labels::new("Blue", "Black"));
        let game = GameState::replay(variant.clone(), [3, 4].map(Intent::Move));
        let text = render_board(&game.view(), &variant);
        let bottom = text.lines().nth(10).expect("bottom row");
        assert_eq!(bottom, " . | . | . | A | B | . | . ");
    }

    #[test]
    fn test_distinct_initials_are_kept() {
        let variant = Variant::tic_tac_toe().with_labels(Labels::new("Sun", "Moon"));
        assert_eq!(symbols(&variant), ["S".to_string(), "M".to_string()]);
    }

    #[test]
    fn test_move_list_marks_current() {
        let game = GameState::replay(
            Variant::tic_tac_toe(),
            [Intent::Move(4), Intent::JumpTo(0)],
        );
        let text = render_moves(&game.view());
        assert_eq!(text, ">  0. Go to game start\n   1. Go to move #1 X@(1, 1)");
    }
}
