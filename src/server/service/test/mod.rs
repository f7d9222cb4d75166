mod bid;
mod league_match;
mod player;
