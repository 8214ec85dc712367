//! Embedded Spanish dictionary
//!
//! Five-letter words in canonical form (lowercase, accent-free, `ñ` kept)
//! paired with a corpus frequency score. The score is an opaque ranking
//! used only to bias target-word selection toward common words; membership
//! checks ignore it.

/// The playable vocabulary, most frequent first.
pub const WORDS: &[(&str, f64)] = &[
    ("entre", 992.6),
    ("hasta", 960.36),
    ("desde", 929.18),
    ("donde", 899.01),
    ("ahora", 869.84),
    ("tener", 841.62),
    ("hacer", 814.32),
    ("poder", 787.92),
    ("decir", 762.38),
    ("mundo", 737.68),
    ("mismo", 713.79),
    ("saber", 690.68),
    ("gente", 668.32),
    ("mujer", 646.7),
    ("menos", 625.78),
    ("nuevo", 605.55),
    ("mayor", 585.98),
    ("tarde", 567.05),
    ("noche", 548.74),
    ("luego", 531.03),
    ("mejor", 513.9),
    ("nunca", 497.33),
    ("deber", 481.3),
    ("claro", 465.79),
    ("dejar", 450.8),
    ("mirar", 436.29),
    ("calle", 422.25),
    ("campo", 408.68),
    ("joven", 395.55),
    ("pasar", 382.84),
    ("libro", 370.56),
    ("salir", 358.67),
    ("venir", 347.17),
    ("cielo", 336.05),
    ("fecha", 325.29),
    ("carta", 314.88),
    ("papel", 304.81),
    ("fuego", 295.08),
    ("clase", 285.65),
    ("poner", 276.54),
    ("comer", 267.72),
    ("siglo", 259.19),
    ("playa", 250.94),
    ("coche", 242.96),
    ("padre", 235.24),
    ("madre", 227.77),
    ("amigo", 220.54),
    ("creer", 213.55),
    ("traer", 206.78),
    ("pedir", 200.24),
    ("abrir", 193.91),
    ("vivir", 187.78),
    ("morir", 181.86),
    ("jugar", 176.13),
    ("ganar", 170.58),
    ("andar", 165.21),
    ("subir", 160.02),
    ("bajar", 155.0),
    ("valer", 150.14),
    ("medir", 145.44),
    ("pagar", 140.89),
    ("parar", 136.48),
    ("pesar", 132.22),
    ("beber", 128.1),
    ("echar", 124.12),
    ("tocar", 120.26),
    ("lavar", 116.52),
    ("secar", 112.91),
    ("nadar", 109.41),
    ("volar", 106.03),
    ("coser", 102.76),
    ("soñar", 99.59),
    ("verde", 96.52),
    ("negro", 93.56),
    ("largo", 90.69),
    ("corto", 87.91),
    ("ancho", 85.22),
    ("gordo", 82.62),
    ("flaco", 80.1),
    ("suave", 77.66),
    ("lento", 75.3),
    ("serio", 73.02),
    ("sucio", 70.81),
    ("debil", 68.67),
    ("veloz", 66.6),
    ("feliz", 64.59),
    ("tibio", 62.65),
    ("norte", 60.77),
    ("oeste", 58.95),
    ("plaza", 57.19),
    ("museo", 55.49),
    ("banco", 53.84),
    ("hotel", 52.24),
    ("barco", 50.69),
    ("avion", 49.2),
    ("metro", 47.74),
    ("motor", 46.34),
    ("rueda", 44.98),
    ("llave", 43.66),
    ("bolsa", 42.39),
    ("falda", 41.15),
    ("traje", 39.96),
    ("gorra", 38.8),
    ("perla", 37.67),
    ("plata", 36.59),
    ("acero", 35.53),
    ("metal", 34.51),
    ("arena", 33.53),
    ("barro", 32.57),
    ("humor", 31.64),
    ("broma", 30.74),
    ("juego", 29.87),
    ("dados", 29.02),
    ("naipe", 28.21),
    ("leche", 27.41),
    ("queso", 26.64),
    ("carne", 25.9),
    ("fruta", 25.18),
    ("pollo", 24.48),
    ("huevo", 23.8),
    ("cerdo", 23.14),
    ("arroz", 22.5),
    ("salsa", 21.88),
    ("dulce", 21.28),
    ("pasta", 20.7),
    ("grano", 20.13),
    ("monte", 19.59),
    ("costa", 19.05),
    ("selva", 18.54),
    ("valle", 18.04),
    ("cerro", 17.55),
    ("llano", 17.08),
    ("delta", 16.62),
    ("golfo", 16.18),
    ("atlas", 15.75),
    ("roble", 15.33),
    ("lunes", 14.92),
    ("enero", 14.53),
    ("marzo", 14.14),
    ("abril", 13.77),
    ("junio", 13.41),
    ("julio", 13.06),
    ("cinco", 12.71),
    ("siete", 12.38),
    ("nueve", 12.06),
    ("perro", 11.74),
    ("raton", 11.44),
    ("cabra", 11.14),
    ("oveja", 10.85),
    ("tigre", 10.57),
    ("leona", 10.3),
    ("zorro", 10.03),
    ("peces", 9.77),
    ("señor", 9.52),
    ("araña", 9.27),
    ("sueño", 9.03),
    ("otoño", 8.8),
    ("señal", 8.57),
    ("primo", 8.35),
    ("novia", 8.14),
    ("novio", 7.93),
    ("cesta", 7.72),
    ("horno", 7.52),
    ("plato", 7.33),
    ("jarra", 7.14),
    ("tapas", 6.95),
    ("pinza", 6.77),
    ("grifo", 6.59),
    ("ducha", 6.42),
    ("jabon", 6.25),
    ("peine", 6.09),
    ("crema", 5.92),
    ("aroma", 5.77),
    ("letra", 5.61),
    ("firma", 5.46),
    ("sello", 5.32),
    ("sobre", 5.17),
    ("texto", 5.03),
    ("verso", 4.89),
    ("poema", 4.76),
    ("prosa", 4.63),
    ("drama", 4.5),
    ("actor", 4.37),
    ("danza", 4.24),
    ("opera", 4.12),
    ("banda", 4.0),
    ("ritmo", 3.89),
    ("anual", 3.77),
    ("epoca", 3.66),
    ("breve", 3.55),
    ("plazo", 3.44),
    ("turno", 3.33),
    ("pausa", 3.23),
    ("curso", 3.12),
    ("salto", 3.02),
    ("lucha", 2.92),
    ("pelea", 2.82),
    ("honor", 2.73),
    ("deuda", 2.63),
    ("gasto", 2.54),
    ("pobre", 2.44),
    ("exito", 2.35),
    ("fallo", 2.26),
    ("error", 2.18),
    ("mente", 2.09),
    ("animo", 2.0),
    ("genio", 1.92),
    ("magia", 1.84),
    ("bruja", 1.75),
    ("reina", 1.67),
    ("reyes", 1.59),
    ("trono", 1.51),
    ("corte", 1.43),
    ("espia", 1.36),
    ("norma", 1.28),
    ("leyes", 1.2),
    ("justo", 1.13),
    ("firme", 1.06),
    ("silla", 0.98),
    ("tabla", 0.91),
    ("piano", 0.84),
    ("radio", 0.77),
    ("reloj", 0.7),
    ("lapiz", 0.63),
];
