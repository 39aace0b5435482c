//! Crate root module declarations for the Quince chess rules engine.
//!
//! Exposes the board model, move generation, evaluation and search, the
//! strategy registry, and notation helpers under stable module paths for the
//! match binary, tests and embedding front ends.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_position;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod outcome;
    pub mod position_history;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod perft;
    pub mod piece_relations;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod positional_tables;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_registry;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod bot_match;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
