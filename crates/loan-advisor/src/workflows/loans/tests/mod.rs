mod common;
mod decision;
mod intake;
