mod check;
mod helpers;
