pub mod d400_country_explorer;
