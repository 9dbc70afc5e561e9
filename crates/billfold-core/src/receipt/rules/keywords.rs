//! Static category keyword dictionary.
//!
//! Lowercase keywords in English, German, and Simplified Chinese, scored
//! as substrings by the classifier. Miscellaneous carries no keywords;
//! it is the fallback when nothing scores.

use crate::models::receipt::Category;

/// Keywords for one scored category.
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Dictionary entries in classifier evaluation order.
pub static CATEGORY_KEYWORDS: [CategoryKeywords; 8] = [
    CategoryKeywords {
        category: Category::Housing,
        keywords: &[
            // English
            "rent", "mortgage", "property tax", "hoa", "home insurance", "landlord",
            "apartment", "lease", "housing", "real estate", "property",
            // German
            "miete", "hypothek", "grundsteuer", "hausverwaltung", "wohnung",
            "immobilie", "vermieter", "mietvertrag",
            // Chinese
            "房租", "房贷", "物业费", "房产税", "房屋保险", "公寓", "租房",
            "按揭", "住房", "房东",
        ],
    },
    CategoryKeywords {
        category: Category::Utilities,
        keywords: &[
            // English
            "electric", "electricity", "power", "water", "gas bill", "internet",
            "wifi", "phone", "mobile", "verizon", "at&t", "tmobile", "t-mobile",
            "comcast", "spectrum", "utility", "utilities",
            // German
            "strom", "wasser", "heizung", "nebenkosten", "telefon", "handy",
            "internet", "rundfunk", "gez", "stadtwerke", "telekom", "vodafone", "o2",
            // Chinese
            "电费", "水费", "燃气费", "网费", "话费", "手机费", "宽带",
            "暖气费", "水电", "移动", "联通", "电信",
        ],
    },
    CategoryKeywords {
        category: Category::Groceries,
        keywords: &[
            // English
            "grocery", "supermarket", "whole foods", "trader joe", "kroger",
            "safeway", "walmart", "target", "costco", "aldi", "publix",
            "food market", "produce", "meat", "dairy",
            // German
            "supermarkt", "lebensmittel", "edeka", "rewe", "lidl", "penny",
            "netto", "kaufland", "dm", "rossmann", "aldi",
            // Chinese
            "超市", "食品", "生鲜", "水果", "蔬菜", "肉", "盒马", "永辉",
            "华润万家", "沃尔玛", "家乐福", "大润发", "便利店", "菜市场",
        ],
    },
    CategoryKeywords {
        category: Category::Transportation,
        keywords: &[
            // English
            "uber", "lyft", "taxi", "gas", "fuel", "shell", "chevron", "exxon",
            "bp", "mobil", "parking", "transit", "metro", "bus", "train",
            "car payment", "auto insurance", "car insurance", "maintenance",
            "mechanic", "oil change", "tire", "toll",
            // German
            "tankstelle", "benzin", "diesel", "parkhaus", "parkplatz", "bahn",
            "deutsche bahn", "db", "taxi", "öpnv", "fahrkarte", "ticket",
            "kfz versicherung", "autowerkstatt", "aral", "jet", "esso", "total",
            // Chinese
            "滴滴", "出租车", "打车", "加油", "加油站", "停车", "停车场",
            "地铁", "公交", "火车", "高铁", "车险", "保养", "维修",
            "中石油", "中石化", "壳牌", "车贷",
        ],
    },
    CategoryKeywords {
        category: Category::DiningOut,
        keywords: &[
            // English
            "restaurant", "cafe", "coffee", "pizza", "burger", "bar", "pub",
            "starbucks", "mcdonald", "subway", "chipotle", "wendy", "taco bell",
            "kfc", "dunkin", "panera", "chick-fil-a", "dine", "bistro", "grill",
            // German
            "restaurant", "bäckerei", "konditorei", "café", "kneipe", "biergarten",
            "imbiss", "pizzeria", "döner",
            // Chinese
            "餐厅", "饭店", "咖啡", "外卖", "美食", "小吃", "火锅", "烧烤",
            "星巴克", "麦当劳", "肯德基", "必胜客", "海底捞", "喜茶", "奈雪",
            "奶茶", "酒吧",
        ],
    },
    CategoryKeywords {
        category: Category::Entertainment,
        keywords: &[
            // English
            "movie", "cinema", "theater", "theatre", "netflix", "spotify", "hulu",
            "disney", "hbo", "amazon prime", "concert", "game", "arcade",
            "bowling", "museum", "zoo", "park", "amusement", "hobby", "sports",
            // German
            "kino", "theater", "konzert", "museum", "freizeitpark", "zoo",
            "streaming", "spiel", "unterhaltung", "veranstaltung", "eintritt",
            // Chinese
            "电影", "电影院", "演唱会", "音乐会", "游戏", "娱乐", "门票",
            "博物馆", "动物园", "游乐园", "ktv", "网吧", "剧院", "话剧",
            "爱奇艺", "腾讯视频", "优酷", "网易云", "qq音乐", "健身",
        ],
    },
    CategoryKeywords {
        category: Category::Travel,
        keywords: &[
            // English
            "airline", "flight", "hotel", "airbnb", "booking", "expedia",
            "vacation", "trip", "travel", "resort", "cruise", "car rental",
            "hertz", "enterprise", "avis", "hostel", "motel",
            // German
            "flughafen", "flug", "hotel", "urlaub", "reise", "mietwagen",
            "unterkunft", "pension", "ferienhaus",
            // Chinese
            "飞机", "机票", "酒店", "民宿", "旅游", "旅行", "度假", "租车",
            "携程", "去哪儿", "飞猪", "订房", "航班",
        ],
    },
    CategoryKeywords {
        category: Category::ClothingAndPersonalCare,
        keywords: &[
            // English
            "clothing", "apparel", "nike", "adidas", "zara", "h&m", "gap",
            "old navy", "nordstrom", "macy", "shoes", "haircut", "salon",
            "barber", "spa", "grooming", "toiletries", "cosmetics", "makeup",
            "sephora", "ulta",
            // German
            "kleidung", "mode", "schuhe", "friseur", "kosmetik", "drogerie",
            "c&a", "primark", "deichmann", "dm", "rossmann",
            // Chinese
            "服装", "鞋", "包", "理发", "美容", "化妆品", "护肤", "洗护",
            "优衣库", "无印良品", "zara", "美发", "美甲",
        ],
    },
];
