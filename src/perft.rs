use crate::board::Board;

impl Board {
    /// Number of leaf positions `depth` plies below this one, counting only
    /// moves the side to move is allowed to play.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let player = self.current_player();
        player
            .legal_moves()
            .iter()
            .map(|mv| player.make_move(mv))
            .filter(|transition| transition.status().is_done())
            .map(|transition| {
                if depth == 1 {
                    1
                } else {
                    transition.board().perft(depth - 1)
                }
            })
            .sum()
    }
}
