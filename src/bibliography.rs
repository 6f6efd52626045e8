/// Some literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// H. Andoyer (1932): *Formule donnant la longueur de la géodésique joignant
    /// deux points de l'ellipsoïde donnés par leurs coordonnées géographiques*.
    /// Bulletin Géodésique 34, pp. 77-81.
    /// [DOI](https://doi.org/10.1007/BF03030136)
    And32,

    /// B.R. Bowring (1985): *The accuracy of geodetic latitude and height equations*.
    /// Survey Review, 28(218), pp.202-206,
    /// [DOI](https://doi.org/10.1179/sre.1985.28.218.202)
    Bow85,

    /// Toshio Fukushima (2006): *Transformation from Cartesian to Geodetic Coordinates Accelerated by Halley’s Method*.
    /// Journal of Geodesy, 79(12), pp.689-693
    /// [DOI](https://doi.org/10.1007/s00190-006-0023-2)
    Fuk06,

    /// Charles F.F. Karney (2013) Algorithms for geodesics. Journal of Geodesy 87, 43–55.
    /// [DOI](https://doi.org/10.1007/s00190-012-0578-z)
    Kar13,

    /// S. Ramanujan (1914): *Modular equations and approximations to π*.
    /// Quarterly Journal of Mathematics 45, pp. 350-372.
    /// (Source of the approximation to the perimeter of an ellipse)
    Ram14,

    /// J.P. Snyder (1987): *Map Projections - A Working Manual*.
    /// U.S. Geological Survey Professional Paper 1395.
    /// [DOI](https://doi.org/10.3133/pp1395)
    Sny87,
}
