mod bid;
mod waiver;
mod waiver_priority;
