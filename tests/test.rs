

mod move_generating;
mod pseudo_legal_checks;
mod board_hash;
