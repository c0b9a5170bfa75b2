pub mod app;
pub mod header;
pub mod player_bar;
pub mod track_list;
pub mod welcome;
