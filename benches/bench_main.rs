#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

extern crate chesscore;

mod lookup_benches;
mod perft_benches;
mod piece_loc_benches;

criterion_main! {
    bit_benches::bit_benches_group,
    board_benches::board_benches_group,
    lookup_benches::lookup_benches,
    move_gen_benches::movegen_benches,
    perft_benches::perft_benches_group,
    piece_loc_benches::piece_loc_benches_group,
}
