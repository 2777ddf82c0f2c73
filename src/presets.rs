//! Gradient preset registry.
//!
//! Presets are the named linear gradients the home screen is painted with.
//! The registry ends with the `NumPresets` sentinel, which is not a concrete
//! preset and is never listed or resolved.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An 8-bit RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::hex(0x000000);

    /// Opaque color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 255,
        }
    }

    /// Linear interpolation, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A gradient stop: offset in `0.0..=1.0` and its color.
pub type Stop = (f32, Rgba);

struct PresetDef {
    name: &'static str,
    value: u16,
    stops: &'static [Stop],
}

macro_rules! registry {
    ($($name:ident = $value:literal : [$(($off:literal, $hex:literal)),* $(,)?]),* $(,)?) => {
        static REGISTRY: &[PresetDef] = &[
            $(PresetDef {
                name: stringify!($name),
                value: $value,
                stops: &[$(($off, Rgba::hex($hex))),*],
            },)*
        ];
    };
}

registry! {
    WarmFlame = 1: [(0.0, 0xff9a9e), (0.99, 0xfad0c4), (1.0, 0xfad0c4)],
    NightFade = 2: [(0.0, 0xa18cd1), (1.0, 0xfbc2eb)],
    SpringWarmth = 3: [(0.0, 0xfad0c4), (0.01, 0xfad0c4), (1.0, 0xffd1ff)],
    JuicyPeach = 4: [(0.0, 0xffecd2), (1.0, 0xfcb69f)],
    YoungPassion = 5: [
        (0.0, 0xff8177), (0.0, 0xff867a), (0.21, 0xff8c7f),
        (0.52, 0xf99185), (0.78, 0xcf556c), (1.0, 0xb12a5b),
    ],
    LadyLips = 6: [(0.0, 0xff9a9e), (0.99, 0xfecfef), (1.0, 0xfecfef)],
    SunnyMorning = 7: [(0.0, 0xf6d365), (1.0, 0xfda085)],
    RainyAshville = 8: [(0.0, 0xfbc2eb), (1.0, 0xa6c1ee)],
    FrozenDreams = 9: [(0.0, 0xfdcbf1), (0.01, 0xfdcbf1), (1.0, 0xe6dee9)],
    WinterNeva = 10: [(0.0, 0xa1c4fd), (1.0, 0xc2e9fb)],
    DustyGrass = 11: [(0.0, 0xd4fc79), (1.0, 0x96e6a1)],
    TemptingAzure = 12: [(0.0, 0x84fab0), (1.0, 0x8fd3f4)],
    HeavyRain = 13: [(0.0, 0xcfd9df), (1.0, 0xe2ebf0)],
    AmyCrisp = 14: [(0.0, 0xa6c0fe), (1.0, 0xf68084)],
    MeanFruit = 15: [(0.0, 0xfccb90), (1.0, 0xd57eeb)],
    DeepBlue = 16: [(0.0, 0xe0c3fc), (1.0, 0x8ec5fc)],
    RipeMalinka = 17: [(0.0, 0xf093fb), (1.0, 0xf5576c)],
    CloudyKnoxville = 18: [(0.0, 0xfdfbfb), (1.0, 0xebedee)],
    MalibuBeach = 19: [(0.0, 0x4facfe), (1.0, 0x00f2fe)],
    NewLife = 20: [(0.0, 0x43e97b), (1.0, 0x38f9d7)],
    TrueSunset = 21: [(0.0, 0xfa709a), (1.0, 0xfee140)],
    MorpheusDen = 22: [(0.0, 0x30cfd0), (1.0, 0x330867)],
    RareWind = 23: [(0.0, 0xa8edea), (1.0, 0xfed6e3)],
    NearMoon = 24: [(0.0, 0x5ee7df), (1.0, 0xb490ca)],
    WildApple = 25: [(0.0, 0xd299c2), (1.0, 0xfef9d7)],
    SaintPetersburg = 26: [(0.0, 0xf5f7fa), (1.0, 0xc3cfe2)],
    PlumPlate = 28: [(0.0, 0x667eea), (1.0, 0x764ba2)],
    EverlastingSky = 29: [(0.0, 0xfdfcfb), (1.0, 0xe2d1c3)],
    HappyFisher = 30: [(0.0, 0x89f7fe), (1.0, 0x66a6ff)],
    Blessing = 31: [(0.0, 0xfddb92), (1.0, 0xd1fdff)],
    SharpeyeEagle = 32: [(0.0, 0x9890e3), (1.0, 0xb1f4cf)],
    LadogaBottom = 33: [(0.0, 0xebc0fd), (1.0, 0xd9ded8)],
    LemonGate = 34: [(0.0, 0x96fbc4), (1.0, 0xf9f586)],
    ItmeoBranding = 35: [(0.0, 0x2af598), (1.0, 0x009efd)],
    ZeusMiracle = 36: [(0.0, 0xcd9cf2), (1.0, 0xf6f3ff)],
    OldHat = 37: [
        (0.0, 0xe4afcb), (0.0, 0xb8cbb8), (0.0, 0xb8cbb8),
        (0.30, 0xe2c58b), (0.64, 0xc2ce9c), (1.0, 0x7edbdc),
    ],
    StarWine = 38: [
        (0.0, 0xb8cbb8), (0.0, 0xb8cbb8), (0.0, 0xb465da),
        (0.33, 0xcf6cc9), (0.66, 0xee609c), (1.0, 0xee609c),
    ],
    HappyAcid = 41: [(0.0, 0x37ecba), (1.0, 0x72afd3)],
    AwesomePine = 42: [(0.0, 0xebbba7), (1.0, 0xcfc7f8)],
    NewYork = 43: [(0.0, 0xfff1eb), (1.0, 0xace0f9)],
    ShyRainbow = 44: [
        (0.0, 0xeea2a2), (0.19, 0xbbc1bf), (0.42, 0x57c6e1),
        (0.79, 0xb49fda), (1.0, 0x7ac5d8),
    ],
    MixedHopes = 46: [(0.0, 0xc471f5), (1.0, 0xfa71cd)],
    FlyHigh = 47: [(0.0, 0x48c6ef), (1.0, 0x6f86d6)],
    StrongBliss = 48: [(0.0, 0xf78ca0), (0.19, 0xf9748f), (0.60, 0xfd868c), (1.0, 0xfe9a8b)],
    FreshMilk = 49: [(0.0, 0xfeada6), (1.0, 0xf5efef)],
    SnowAgain = 50: [(0.0, 0xe6e9f0), (1.0, 0xeef1f5)],
    FebruaryInk = 51: [(0.0, 0xaccbee), (1.0, 0xe7f0fd)],
    KindSteel = 52: [(0.0, 0xe9defa), (1.0, 0xfbfcdb)],
    SoftGrass = 53: [(0.0, 0xc1dfc4), (1.0, 0xdeecdd)],
    GrownEarly = 54: [(0.0, 0x0ba360), (1.0, 0x3cba92)],
    SharpBlues = 55: [(0.0, 0x00c6fb), (1.0, 0x005bea)],
    ShadyWater = 56: [(0.0, 0x74ebd5), (1.0, 0x9face6)],
    DirtyBeauty = 57: [(0.0, 0x6a85b6), (1.0, 0xbac8e0)],
    GreatWhale = 58: [(0.0, 0xa3bded), (1.0, 0x6991c7)],
    TeenNotebook = 59: [(0.0, 0x9795f0), (1.0, 0xfbc8d4)],
    PoliteRumors = 60: [(0.0, 0xa7a6cb), (0.52, 0x8989ba), (1.0, 0x8989ba)],
    SweetPeriod = 61: [
        (0.0, 0x3f51b1), (0.13, 0x5a55ae), (0.25, 0x7b5fac),
        (0.38, 0x8f6aae), (0.50, 0xa86aa4), (0.62, 0xcc6b8e),
        (0.75, 0xf18271), (0.87, 0xf3a469), (1.0, 0xf7c978),
    ],
    WideMatrix = 62: [
        (0.0, 0xfcc5e4), (0.15, 0xfda34b), (0.35, 0xff7882),
        (0.52, 0xc8699e), (0.71, 0x7046aa), (0.87, 0x0c1db8), (1.0, 0x020f75),
    ],
    SoftCherish = 63: [
        (0.0, 0xdbdcd7), (0.24, 0xdddcd7), (0.30, 0xe2c9cc), (0.46, 0xe7627d),
        (0.59, 0xb8235a), (0.71, 0x801357), (0.84, 0x3d1635), (1.0, 0x1c1a27),
    ],
    RedSalvation = 64: [(0.0, 0xf43b47), (1.0, 0x453a94)],
    BurningSpring = 65: [
        (0.0, 0x4fb576), (0.30, 0x44c489), (0.46, 0x28a9ae),
        (0.59, 0x28a2b7), (0.71, 0x4c7788), (0.86, 0x6c4f63), (1.0, 0x432c39),
    ],
    NightParty = 66: [(0.0, 0x0250c5), (1.0, 0xd43f8d)],
    SkyGlider = 67: [(0.0, 0x88d3ce), (1.0, 0x6e45e2)],
    HeavenPeach = 68: [(0.0, 0xd9afd9), (1.0, 0x97d9e1)],
    PurpleDivision = 69: [(0.0, 0x7028e4), (1.0, 0xe5b2ca)],
    AquaSplash = 70: [(0.0, 0x13547a), (1.0, 0x80d0c7)],
    SpikyNaga = 72: [
        (0.0, 0x505285), (0.12, 0x585e92), (0.25, 0x65689f),
        (0.37, 0x7474b0), (0.50, 0x7e7ebb), (0.62, 0x8389c7),
        (0.75, 0x9795d4), (0.87, 0xa2a1dc), (1.0, 0xb5aee4),
    ],
    LoveKiss = 73: [(0.0, 0xff0844), (1.0, 0xffb199)],
    CleanMirror = 75: [(0.0, 0x93a5cf), (1.0, 0xe4efe9)],
    PremiumDark = 76: [(0.0, 0x434343), (1.0, 0x000000)],
    ColdEvening = 77: [(0.0, 0x0c3483), (1.0, 0xa2b6df), (1.0, 0x6b8cce), (1.0, 0xa2b6df)],
    CochitiLake = 78: [(0.0, 0x93a5cf), (1.0, 0xe4efe9)],
    SummerGames = 79: [(0.0, 0x92fe9d), (1.0, 0x00c9ff)],
    PassionateBed = 80: [(0.0, 0xff758c), (1.0, 0xff7eb3)],
    MountainRock = 81: [(0.0, 0x868f96), (1.0, 0x596164)],
    DesertHump = 82: [(0.0, 0xc79081), (1.0, 0xdfa579)],
    JungleDay = 83: [(0.0, 0x8baaaa), (1.0, 0xae8b9c)],
    PhoenixStart = 84: [(0.0, 0xf83600), (1.0, 0xf9d423)],
    OctoberSilence = 85: [(0.0, 0xb721ff), (1.0, 0x21d4fd)],
    FarawayRiver = 86: [(0.0, 0x6e45e2), (1.0, 0x88d3ce)],
    AlchemistLab = 87: [(0.0, 0xd558c8), (1.0, 0x24d292)],
    OverSun = 88: [(0.0, 0xabecd6), (1.0, 0xfbed96)],
    PremiumWhite = 89: [
        (0.0, 0xd5d4d0), (0.01, 0xd5d4d0), (0.31, 0xeeeeec),
        (0.75, 0xefeeec), (1.0, 0xe9e9e7),
    ],
    MarsParty = 90: [(0.0, 0x5f72bd), (1.0, 0x9b23ea)],
    EternalConstance = 91: [(0.0, 0x09203f), (1.0, 0x537895)],
    JapanBlush = 92: [(0.0, 0xddd6f3), (1.0, 0xfaaca8), (1.0, 0xfaaca8)],
    SmilingRain = 93: [(0.0, 0xdcb0ed), (1.0, 0x99c99c)],
    CloudyApple = 94: [(0.0, 0xf3e7e9), (0.99, 0xe3eeff), (1.0, 0xe3eeff)],
    BigMango = 95: [(0.0, 0xc71d6f), (1.0, 0xd09693)],
    HealthyWater = 96: [(0.0, 0x96deda), (1.0, 0x50c9c3)],
    AmourAmour = 97: [(0.0, 0xf77062), (1.0, 0xfe5196)],
    RiskyConcrete = 98: [(0.0, 0xc4c5c7), (0.52, 0xdcdddf), (1.0, 0xebebeb)],
    StrongStick = 99: [(0.0, 0xa8caba), (1.0, 0x5d4157)],
    ViciousStance = 100: [(0.0, 0x29323c), (1.0, 0x485563)],
    PaloAlto = 101: [(0.0, 0x16a085), (1.0, 0xf4d03f)],
    HappyMemories = 102: [(0.0, 0xff5858), (1.0, 0xf09819)],
    MidnightBloom = 103: [(0.0, 0x2b5876), (1.0, 0x4e4376)],
    Crystalline = 104: [(0.0, 0x00cdac), (1.0, 0x8ddad5)],
    PartyBliss = 106: [(0.0, 0x4481eb), (1.0, 0x04befe)],
    ConfidentCloud = 107: [(0.0, 0xdad4ec), (0.01, 0xdad4ec), (1.0, 0xf3e7e9)],
    LeCocktail = 108: [(0.0, 0x874da2), (1.0, 0xc43a30)],
    RiverCity = 109: [(0.0, 0x4481eb), (1.0, 0x04befe)],
    FrozenBerry = 110: [(0.0, 0xe8198b), (1.0, 0xc7eafd)],
    ChildCare = 112: [(0.0, 0xf794a4), (1.0, 0xfdd6bd)],
    FlyingLemon = 113: [(0.0, 0x64b3f4), (1.0, 0xc2e59c)],
    NewRetrowave = 114: [(0.0, 0x3b41c5), (0.49, 0xa981bb), (1.0, 0xffc8a9)],
    HiddenJaguar = 115: [(0.0, 0x0fd850), (1.0, 0xf9f047)],
    AboveTheSky = 116: [
        (0.0, 0xd3d3d3), (0.01, 0xd3d3d3), (0.26, 0xe0e0e0),
        (0.48, 0xefefef), (0.75, 0xd9d9d9), (1.0, 0xbcbcbc),
    ],
    Nega = 117: [(0.0, 0xee9ca7), (1.0, 0xffdde1)],
    DenseWater = 118: [(0.0, 0x3ab5b0), (0.31, 0x3d99be), (1.0, 0x56317a)],
    Seashore = 120: [(0.0, 0x209cff), (1.0, 0x68e0cf)],
    MarbleWall = 121: [(0.0, 0xbdc2e8), (0.01, 0xbdc2e8), (1.0, 0xe6dee9)],
    CheerfulCaramel = 122: [(0.0, 0xe6b980), (1.0, 0xeacda3)],
    NightSky = 123: [(0.0, 0x1e3c72), (0.01, 0x1e3c72), (1.0, 0x2a5298)],
    MagicLake = 124: [(0.0, 0xd5dee7), (0.0, 0xffafbd), (1.0, 0xc9ffbf)],
    YoungGrass = 125: [(0.0, 0x9be15d), (1.0, 0x00e3ae)],
    ColorfulPeach = 126: [(0.0, 0xed6ea0), (1.0, 0xec8c69)],
    GentleCare = 127: [(0.0, 0xffc3a0), (1.0, 0xffafbd)],
    PlumBath = 128: [(0.0, 0xcc208e), (1.0, 0x6713d2)],
    HappyUnicorn = 129: [(0.0, 0xb3ffab), (1.0, 0x12fff7)],
    AfricanField = 131: [
        (0.0, 0x65bd60), (0.25, 0x5ac1a8), (0.50, 0x3ec6ed),
        (0.75, 0xb7ddb7), (1.0, 0xfef381),
    ],
    SolidStone = 132: [(0.0, 0x243949), (1.0, 0x517fa4)],
    OrangeJuice = 133: [(0.0, 0xfc6076), (1.0, 0xff9a44)],
    GlassWater = 134: [(0.0, 0xdfe9f3), (1.0, 0xffffff)],
    NorthMiracle = 136: [(0.0, 0x00dbde), (1.0, 0xfc00ff)],
    FruitBlend = 137: [(0.0, 0xf9d423), (1.0, 0xff4e50)],
    MillenniumPine = 138: [(0.0, 0x50cc7f), (1.0, 0xf5d100)],
    HighFlight = 139: [(0.0, 0x0acffe), (1.0, 0x495aff)],
    MoleHall = 140: [(0.0, 0x616161), (1.0, 0x9bc5c3)],
    SpaceShift = 142: [(0.0, 0x3d3393), (0.37, 0x2b76b9), (0.65, 0x2cacd1), (1.0, 0x35eb93)],
    ForestInei = 143: [(0.0, 0xdf89b5), (1.0, 0xbfd9fe)],
    RoyalGarden = 144: [(0.0, 0xed6ea0), (1.0, 0xec8c69)],
    RichMetal = 145: [(0.0, 0xd7d2cc), (1.0, 0x304352)],
    JuicyCake = 146: [(0.0, 0xe14fad), (1.0, 0xf9d423)],
    SmartIndigo = 147: [(0.0, 0xb224ef), (1.0, 0x7579ff)],
    SandStrike = 148: [(0.0, 0xc1c161), (0.0, 0xc1c161), (1.0, 0xd4d4b1)],
    NorseBeauty = 149: [(0.0, 0xec77ab), (1.0, 0x7873f5)],
    AquaGuidance = 150: [(0.0, 0x007adf), (1.0, 0x00ecbc)],
    SunVeggie = 151: [(0.0, 0x20e2d7), (1.0, 0xf9fea5)],
    SeaLord = 152: [(0.0, 0x2cd8d5), (0.56, 0xc5c1ff), (1.0, 0xffbac3)],
    BlackSea = 153: [(0.0, 0x2cd8d5), (0.48, 0x6b8dd6), (1.0, 0x8e37d7)],
    GrassShampoo = 154: [(0.0, 0xdfffcd), (0.48, 0x90f9c4), (1.0, 0x39f3bb)],
    LandingAircraft = 155: [(0.0, 0x5d9fff), (0.48, 0xb8dcff), (1.0, 0x6bbbff)],
    WitchDance = 156: [(0.0, 0xa8bfff), (1.0, 0x884d80)],
    SleeplessNight = 157: [(0.0, 0x5271c4), (0.48, 0xb19fff), (1.0, 0xeca1fe)],
    AngelCare = 158: [(0.0, 0xffe29f), (0.48, 0xffa99f), (1.0, 0xff719a)],
    CrystalRiver = 159: [(0.0, 0x22e1ff), (0.48, 0x1d8fe1), (1.0, 0x625eb1)],
    SoftLipstick = 160: [(0.0, 0xb6cee8), (1.0, 0xf578dc)],
    SaltMountain = 161: [(0.0, 0xfffeff), (1.0, 0xd7fffe)],
    PerfectWhite = 162: [(0.0, 0xe3fdf5), (1.0, 0xffe6fa)],
    FreshOasis = 163: [(0.0, 0x7de2fc), (1.0, 0xb9b6e5)],
    StrictNovember = 164: [(0.0, 0xcbbacc), (1.0, 0x2580b3)],
    MorningSalad = 165: [(0.0, 0xb7f8db), (1.0, 0x50a7c2)],
    DeepRelief = 166: [(0.0, 0x7085b6), (0.50, 0x87a7d9), (1.0, 0xdef3f8)],
    SeaStrike = 167: [(0.0, 0x77ffd2), (0.48, 0x6297db), (1.0, 0x1eecff)],
    NightCall = 168: [(0.0, 0xac32e4), (0.48, 0x7918f2), (1.0, 0x4801ff)],
    SupremeSky = 169: [(0.0, 0xd4ffec), (0.48, 0x57f2cc), (1.0, 0x4596fb)],
    LightBlue = 170: [(0.0, 0x9efbd3), (0.48, 0x57e9f2), (1.0, 0x45d4fb)],
    MindCrawl = 171: [(0.0, 0x473b7b), (0.51, 0x3584a7), (1.0, 0x30d2be)],
    LilyMeadow = 172: [(0.0, 0x65379b), (0.53, 0x886aea), (1.0, 0x6457c6)],
    SugarLollipop = 173: [(0.0, 0xa445b2), (0.52, 0xd41872), (1.0, 0xff0066)],
    SweetDessert = 174: [(0.0, 0x7742b2), (0.52, 0xf180ff), (1.0, 0xfd8bd9)],
    MagicRay = 175: [(0.0, 0xff3cac), (0.52, 0x562b7c), (1.0, 0x2b86c5)],
    TeenParty = 176: [(0.0, 0xff057c), (0.50, 0x8d0b93), (1.0, 0x321575)],
    FrozenHeat = 177: [(0.0, 0xff057c), (0.48, 0x7c64d5), (1.0, 0x4cc3ff)],
    GagarinView = 178: [(0.0, 0x69eacb), (0.48, 0xeaccf8), (1.0, 0x6654f1)],
    FabledSunset = 179: [(0.0, 0x231557), (0.29, 0x44107a), (0.67, 0xff1361), (1.0, 0xfff800)],
    PerfectBlue = 180: [(0.0, 0x3d4e81), (0.48, 0x5753c9), (1.0, 0x6e7ff3)],
    NumPresets = 181: [],
}

/// A concrete, selectable gradient preset.
///
/// Only obtainable through [`Preset::list_all`] or [`Preset::resolve_by_name`],
/// so it never refers to the sentinel.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Preset {
    index: usize,
}

impl Preset {
    /// Every concrete preset, in registry order.
    pub fn list_all() -> impl Iterator<Item = Preset> + Clone {
        (0..REGISTRY.len() - 1).map(|index| Preset { index })
    }

    /// Number of concrete presets.
    pub fn count() -> usize {
        REGISTRY.len() - 1
    }

    /// Look up a preset by its exact name.
    pub fn resolve_by_name(name: &str) -> Result<Preset> {
        Self::list_all()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    fn def(self) -> &'static PresetDef {
        &REGISTRY[self.index]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Stable numeric id of the preset.
    pub fn value(self) -> u16 {
        self.def().value
    }

    pub fn stops(self) -> &'static [Stop] {
        self.def().stops
    }

    /// First and last gradient stop colors, used to theme the controls.
    pub fn boundary_colors(self) -> (Rgba, Rgba) {
        let stops = self.stops();
        let start = stops.first().map_or(Rgba::BLACK, |s| s.1);
        let end = stops.last().map_or(Rgba::BLACK, |s| s.1);
        (start, end)
    }

    /// Color of the gradient at `t` in `0.0..=1.0`.
    pub fn color_at(self, t: f32) -> Rgba {
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0);
        let Some(&(first_off, first)) = stops.first() else {
            return Rgba::BLACK;
        };
        if t <= first_off {
            return first;
        }
        for pair in stops.windows(2) {
            let (a_off, a) = pair[0];
            let (b_off, b) = pair[1];
            if t <= b_off {
                let span = b_off - a_off;
                if span <= f32::EPSILON {
                    return b;
                }
                return a.lerp(b, (t - a_off) / span);
            }
        }
        stops.last().map_or(first, |s| s.1)
    }
}

impl fmt::Debug for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Preset").field(&self.name()).finish()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve_by_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_skips_the_sentinel() {
        assert!(Preset::list_all().all(|p| p.name() != "NumPresets"));
        assert_eq!(Preset::list_all().count(), REGISTRY.len() - 1);
        assert_eq!(Preset::count(), REGISTRY.len() - 1);
    }

    #[test]
    fn registry_covers_every_named_gradient() {
        assert_eq!(Preset::count(), 168);
        let last = Preset::resolve_by_name("PerfectBlue").unwrap();
        assert_eq!(last.value(), 180);
        assert_eq!(Preset::resolve_by_name("PerfectWhite").unwrap().value(), 162);
        assert_eq!(Preset::resolve_by_name("PremiumDark").unwrap().value(), 76);
        assert_eq!(Preset::list_all().last(), Some(last));

        let values: Vec<u16> = Preset::list_all().map(Preset::value).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn list_all_is_restartable() {
        let it = Preset::list_all();
        let first: Vec<Preset> = it.clone().collect();
        let second: Vec<Preset> = it.collect();
        assert_eq!(first, second);
        assert_eq!(first, Preset::list_all().collect::<Vec<_>>());
    }

    #[test]
    fn every_listed_preset_has_stops() {
        for p in Preset::list_all() {
            assert!(!p.stops().is_empty(), "{p} has no stops");
        }
    }

    #[test]
    fn resolve_by_name_round_trips_and_rejects_unknown_names() {
        let p = Preset::resolve_by_name("NightFade").unwrap();
        assert_eq!(p.name(), "NightFade");
        assert_eq!(p.value(), 2);

        assert!(matches!(
            Preset::resolve_by_name("NoSuchPreset"),
            Err(Error::UnknownPreset(name)) if name == "NoSuchPreset"
        ));
        assert!(matches!(
            Preset::resolve_by_name("NumPresets"),
            Err(Error::UnknownPreset(_))
        ));
        assert!("nightfade".parse::<Preset>().is_err());
    }

    #[test]
    fn boundary_colors_are_first_and_last_stops() {
        let p = Preset::resolve_by_name("YoungPassion").unwrap();
        assert_eq!(
            p.boundary_colors(),
            (Rgba::hex(0xff8177), Rgba::hex(0xb12a5b))
        );
        assert_eq!(
            Rgba::hex(0xff8177).to_string(),
            "rgba(255, 129, 119, 255)"
        );
    }

    #[test]
    fn color_at_interpolates_between_stops() {
        let p = Preset::resolve_by_name("PremiumDark").unwrap();
        assert_eq!(p.color_at(0.0), Rgba::hex(0x434343));
        assert_eq!(p.color_at(1.0), Rgba::hex(0x000000));
        let mid = p.color_at(0.5);
        assert!(mid.r > 0 && mid.r < 0x43);
        assert_eq!(p.color_at(-3.0), p.color_at(0.0));
    }
}
