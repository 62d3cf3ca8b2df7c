//! Default passphrase dictionary.
//!
//! A full-size lowercase English word list (16,838 entries, word lengths
//! 3 through 9), giving roughly 14 bits of entropy per drawn word. Callers
//! can supply their own list instead.

pub const WORDS: &[&str] = &[
    "abandon", "abandoned", "abandons", "abilities", "ability", "able", "ably", "abnormal",
    "aboard", "abolish", "abolished", "abolishes", "abort", "aborted", "aborting", "aborts",
    "abound", "abounded", "abounding", "abounds", "about", "above", "abrasive", "abroad",
    "abrupt", "abruptly", "absence", "absences", "absent", "absolute", "absorb", "absorbed",
    "absorbing", "absorbs", "abstain", "abstained", "abstains", "abstract", "abstracts", "absurd",
    "absurdly", "abundant", "abuse", "abused", "abuses", "abusing", "academic", "academies",
    "academy", "accent", "accented", "accents", "accept", "accepted", "accepting", "accepts",
    "access", "accessed", "accessing", "accident", "accidents", "acclaim", "acclaimed", "account",
    "accounted", "accounts", "accrue", "accrued", "accrues", "accruing", "accurate", "accuse",
    "accused", "accuses", "accusing", "ace", "aces", "ache", "ached", "aches",
    "achieve", "achieved", "achieves", "achieving", "aching", "acid", "acidic", "acids",
    "acorn", "acorns", "acoustic", "acquire", "acquired", "acquires", "acquiring", "acre",
    "acres", "acrobat", "acrobats", "across", "act", "acted", "acting", "action",
    "actions", "activate", "activated", "active", "actively", "actor", "actors", "actress",
    "acts", "actual", "actually", "acute", "acutely", "adapt", "adapted", "adapting",
    "adapts", "add", "added", "addict", "addicted", "addicts", "adding", "addition",
    "additions", "address", "addressed", "addresses", "adds", "adept", "adequate", "adhere",
    "adhered", "adheres", "adhering", "adjacent", "adjust", "adjusted", "adjusting", "adjusts",
    "admire", "admired", "admires", "admiring", "admit", "admits", "admitted", "adopt",
    "adopted", "adopting", "adopts", "adore", "adored", "adores", "adoring", "adorn",
    "adorned", "adorns", "adult", "adults", "advance", "advanced", "advances", "advancing",
    "advent", "adverb", "adverbs", "advice", "advise", "advised", "advises", "advising",
    "advocate", "advocated", "advocates", "aerial", "affair", "affairs", "affect", "affected",
    "affecting", "affects", "affirm", "affirmed", "affirms", "afford", "afforded", "affording",
    "affords", "afloat", "afraid", "after", "again", "against", "age", "aged",
    "ageless", "agencies", "agency", "agenda", "agendas", "agent", "agents", "ages",
    "aggregate", "agile", "agility", "aging", "agitate", "agitated", "ago", "agony",
    "agree", "agreed", "agreeing", "agrees", "ahead", "aid", "aided", "aiding",
    "aids", "ail", "ailed", "ailing", "ailment", "ails", "aim", "aimed",
    "aiming", "aimless", "aims", "air", "aired", "airfield", "airing", "airline",
    "airlines", "airplane", "airport", "airports", "airs", "airy", "aisle", "aisles",
    "ajar", "alarm", "alarmed", "alarming", "alarms", "albeit", "album", "albums",
    "alert", "alerted", "alerting", "alerts", "algebra", "alias", "aliases", "alibi",
    "alibis", "alien", "aliens", "align", "aligned", "aligning", "aligns", "alike",
    "alive", "all", "allay", "alley", "alleys", "allied", "allies", "allot",
    "allots", "allotted", "allow", "allowed", "allowing", "allows", "alloy", "alloys",
    "allude", "alluded", "alludes", "ally", "almanac", "almond", "almonds", "almost",
    "aloe", "aloft", "alone", "along", "aloof", "aloud", "alpha", "alphabet",
    "already", "also", "altar", "altars", "alter", "altered", "altering", "alters",
    "although", "alto", "always", "amateur", "amateurs", "amaze", "amazed", "amazes",
    "amazing", "amber", "ambient", "ambition", "ambitions", "amble", "ambled", "ambles",
    "ambling", "ambush", "ambushed", "ambushes", "amend", "amended", "amending", "amends",
    "amid", "among", "amongst", "amount", "amounted", "amounts", "ample", "amplified",
    "amplify", "amply", "amuse", "amused", "amuses", "amusing", "analog", "analogy",
    "analyses", "analyst", "analysts", "anchor", "anchored", "anchors", "ancient", "anecdote",
    "anecdotes", "angel", "angelic", "angels", "anger", "angered", "angering", "angers",
    "angle", "angled", "angles", "angling", "angrily", "angry", "anguish", "animal",
    "animals", "animate", "animated", "ankle", "ankles", "annex", "annexed", "annexes",
    "announce", "announced", "announcer", "annoy", "annoyed", "annoying", "annoys", "annual",
    "annually", "anomaly", "answer", "answered", "answering", "answers", "ant", "antenna",
    "antennas", "anthem", "anthems", "antic", "antics", "antique", "antiques", "antler",
    "antlers", "ants", "anvil", "anvils", "anxiety", "anxious", "any", "anybody",
    "anyhow", "anyone", "anything", "anytime", "anyway", "anywhere", "apart", "apartment",
    "apex", "aphid", "aphids", "aplenty", "apologies", "apologize", "apology", "appeal",
    "appealed", "appealing", "appeals", "appear", "appeared", "appearing", "appears", "append",
    "appended", "appending", "appends", "applaud", "applauded", "applauds", "applause", "apple",
    "apples", "applied", "applies", "apply", "applying", "appoint", "appointed", "appoints",
    "approve", "approved", "approves", "approving", "apricot", "apricots", "apron", "aprons",
    "apt", "aptly", "aquarium", "aquatic", "arbor", "arc", "arcade", "arcades",
    "arch", "arched", "archer", "archers", "archery", "arches", "arching", "archive",
    "archived", "archives", "arcs", "ardent", "are", "area", "areas", "arena",
    "arenas", "argue", "argued", "argues", "arguing", "argument", "arguments", "arid",
    "arise", "arisen", "arises", "arising", "arm", "armchair", "armed", "armful",
    "armies", "arming", "armor", "armored", "armory", "arms", "army", "aroma",
    "aromas", "aromatic", "arose", "around", "arouse", "aroused", "arrange", "arranged",
    "arranges", "arranging", "array", "arrayed", "arrays", "arrest", "arrested", "arresting",
    "arrests", "arrival", "arrivals", "arrive", "arrived", "arrives", "arriving", "arrow",
    "arrows", "arson", "art", "arteries", "artery", "artful", "article", "articles",
    "artist", "artistic", "artists", "arts", "artwork", "ascend", "ascended", "ascending",
    "ascends", "ascent", "ash", "ashen", "ashes", "ashore", "aside", "ask",
    "asked", "asking", "asks", "asleep", "aspect", "aspects", "aspen", "asphalt",
    "aspire", "aspired", "aspires", "aspiring", "assay", "assays", "assemble", "assembled",
    "assembly", "assert", "asserted", "asserting", "asserts", "assess", "assessed", "assesses",
    "assessing", "asset", "assets", "assign", "assigned", "assigning", "assigns", "assist",
    "assisted", "assisting", "assists", "assume", "assumed", "assumes", "assuming", "assure",
    "assured", "assures", "assuring", "asteroid", "asteroids", "asthma", "astonish", "astound",
    "astounded", "astounds", "astray", "astute", "asylum", "ate", "athlete", "athletes",
    "athletic", "atlas", "atlases", "atom", "atomic", "atoms", "atone", "atoned",
    "atones", "atoning", "atop", "attach", "attached", "attaches", "attaching", "attack",
    "attacked", "attacking", "attacks", "attain", "attained", "attaining", "attains", "attempt",
    "attempted", "attempts", "attend", "attended", "attending", "attends", "attic", "attics",
    "attire", "attired", "attract", "attracted", "attracts", "auction", "auctioned", "auctions",
    "audible", "audibly", "audience", "audiences", "audio", "audit", "audited", "auditing",
    "auditor", "audits", "august", "aunt", "aunts", "aura", "auras", "author",
    "authored", "authors", "auto", "automate", "automated", "autos", "autumn", "avail",
    "availed", "avails", "avatar", "avatars", "avenge", "avenged", "avenger", "avenue",
    "avenues", "average", "averaged", "averages", "avert", "averted", "averting", "averts",
    "aviation", "aviator", "avid", "avidly", "avocado", "avocados", "avoid", "avoided",
    "avoiding", "avoids", "await", "awaited", "awaiting", "awaits", "awake", "awaken",
    "awakened", "awakens", "award", "awarded", "awarding", "awards", "aware", "away",
    "awe", "awed", "awesome", "awful", "awfully", "awhile", "awkward", "awning",
    "awnings", "axis", "axle", "axles", "azure", "babble", "babbled", "babbles",
    "babbling", "babies", "baboon", "baboons", "baby", "back", "backbone", "backdrop",
    "backed", "backfire", "backing", "backlog", "backpack", "backs", "backup", "backups",
    "backward", "backyard", "bacon", "bad", "badge", "badger", "badgers", "badges",
    "badly", "baffle", "baffled", "baffles", "baffling", "bag", "bagel", "bagels",
    "baggage", "bagged", "bagging", "baggy", "bags", "bail", "bailed", "bailing",
    "bails", "bait", "baited", "baiting", "baits", "bake", "baked", "baker",
    "bakers", "bakery", "bakes", "baking", "balance", "balanced", "balances", "balancing",
    "balconies", "balcony", "bald", "balding", "bale", "bales", "ball", "ballad",
    "ballads", "ballast", "ballet", "balloon", "balloons", "ballot", "ballots", "balls",
    "balmy", "bamboo", "ban", "banana", "bananas", "band", "bandage", "bandaged",
    "bandages", "banded", "banding", "bandit", "bandits", "bands", "bang", "banged",
    "banging", "bangs", "banish", "banished", "banishes", "banjo", "banjos", "bank",
    "banked", "banker", "bankers", "banking", "banks", "banned", "banner", "banners",
    "banning", "banquet", "banquets", "bans", "banter", "bar", "barb", "barbed",
    "barber", "barbers", "barbs", "bare", "bared", "barely", "bares", "bargain",
    "bargained", "bargains", "barge", "barged", "barges", "barging", "baring", "bark",
    "barked", "barking", "barks", "barley", "barn", "barns", "barnyard", "barred",
    "barrel", "barrels", "barren", "barrier", "barriers", "barring", "bars", "barter",
    "bartered", "barters", "base", "based", "baseline", "basement", "bases", "bash",
    "bashed", "bashes", "bashful", "bashing", "basic", "basically", "basics", "basil",
    "basin", "basing", "basins", "basis", "bask", "basked", "basket", "baskets",
    "basking", "basks", "bass", "bat", "batch", "batched", "batches", "bath",
    "bathe", "bathed", "bathes", "bathing", "baths", "bathtub", "baton", "batons",
    "bats", "batted", "batter", "battered", "batters", "battery", "batting", "battle",
    "battled", "battles", "battling", "bay", "bays", "bazaar", "bazaars", "beach",
    "beached", "beaches", "beacon", "beacons", "bead", "beaded", "beads", "beak",
    "beaks", "beam", "beamed", "beaming", "beams", "bean", "beans", "bear",
    "beard", "bearded", "beards", "bearing", "bears", "beast", "beasts", "beat",
    "beaten", "beating", "beats", "beautiful", "beauty", "beaver", "beavers", "became",
    "because", "beckon", "beckoned", "beckons", "become", "becomes", "becoming", "bed",
    "bedding", "bedrock", "bedroom", "beds", "bedside", "bedtime", "bee", "beech",
    "beef", "beehive", "been", "beep", "beeped", "beeping", "beeps", "bees",
    "beet", "beetle", "beetles", "beets", "before", "befriend", "beg", "began",
    "begged", "begging", "begin", "beginner", "begins", "begs", "begun", "behalf",
    "behave", "behaved", "behaves", "behaving", "behavior", "behind", "behold", "beige",
    "being", "beings", "belief", "beliefs", "believe", "believed", "believes", "believing",
    "bell", "bellies", "bellow", "bellowed", "bellows", "bells", "belly", "belong",
    "belonged", "belonging", "belongs", "beloved", "below", "belt", "belted", "belts",
    "bench", "benches", "bend", "bending", "bends", "beneath", "benefit", "benefited",
    "benefits", "benign", "bent", "berries", "berry", "berth", "berths", "beset",
    "beside", "besides", "best", "bestow", "bestowed", "bestows", "bet", "betray",
    "betrayed", "betraying", "betrays", "bets", "better", "betting", "between", "beverage",
    "beverages", "beware", "beyond", "bias", "biased", "biases", "bicycle", "bicycles",
    "bid", "bidder", "bidding", "bids", "big", "bigger", "biggest", "bike",
    "biker", "bikes", "bill", "billed", "billing", "billion", "billions", "billow",
    "billowed", "billows", "bills", "bin", "bind", "binder", "binding", "binds",
    "bins", "biology", "birch", "bird", "birdbath", "birds", "birth", "birthday",
    "births", "biscuit", "biscuits", "bishop", "bishops", "bison", "bit", "bite",
    "bites", "biting", "bits", "bitten", "bitter", "bitterly", "bizarre", "blab",
    "black", "blacken", "blackens", "blade", "blades", "blame", "blamed", "blames",
    "blaming", "bland", "blank", "blanket", "blankets", "blankly", "blanks", "blare",
    "blared", "blares", "blaring", "blast", "blasted", "blasting", "blasts", "blaze",
    "blazed", "blazes", "blazing", "bleach", "bleached", "bleak", "bleat", "bleats",
    "bled", "bleed", "bleeding", "bleeds", "blemish", "blend", "blended", "blending",
    "blends", "bless", "blessed", "blesses", "blessing", "blew", "blimp", "blimps",
    "blind", "blinded", "blinding", "blindly", "blinds", "blink", "blinked", "blinking",
    "blinks", "bliss", "blissful", "blister", "blisters", "blizzard", "blizzards", "bloat",
    "bloated", "blob", "blobs", "block", "blocked", "blocking", "blocks", "blond",
    "blonde", "blood", "bloody", "bloom", "bloomed", "blooming", "blooms", "blossom",
    "blossomed", "blossoms", "blot", "blots", "blotted", "blouse", "blouses", "blow",
    "blowing", "blown", "blows", "blue", "blueprint", "blues", "bluest", "bluff",
    "bluffed", "bluffs", "blunder", "blundered", "blunders", "blunt", "bluntly", "blur",
    "blurred", "blurry", "blurs", "blurt", "blurted", "blurts", "blush", "blushed",
    "blushes", "blushing", "boar", "board", "boarded", "boarding", "boards", "boars",
    "boast", "boasted", "boasting", "boasts", "boat", "boating", "boats", "bob",
    "bobbed", "bobcat", "bobcats", "bobs", "bode", "bodies", "bodily", "body",
    "bog", "bogged", "bogs", "boil", "boiled", "boiler", "boiling", "boils",
    "bold", "bolder", "boldest", "boldly", "bolster", "bolstered", "bolsters", "bolt",
    "bolted", "bolting", "bolts", "bomb", "bombed", "bombs", "bond", "bonded",
    "bonding", "bonds", "bone", "boned", "bones", "bonfire", "bonfires", "bonnet",
    "bonnets", "bonus", "bonuses", "bony", "book", "bookcase", "booked", "booking",
    "booklet", "bookmark", "books", "boom", "boomed", "booming", "booms", "boost",
    "boosted", "booster", "boosting", "boosts", "boot", "booted", "booth", "booths",
    "booting", "boots", "border", "bordered", "bordering", "borders", "bore", "bored",
    "boredom", "bores", "boring", "born", "borne", "borrow", "borrowed", "borrowing",
    "borrows", "bosom", "boss", "bossed", "bosses", "bossy", "botanic", "botany",
    "botch", "botched", "both", "bother", "bothered", "bothers", "bottle", "bottled",
    "bottles", "bottling", "bottom", "bottoms", "bought", "boulder", "boulders", "bounce",
    "bounced", "bounces", "bouncing", "bouncy", "bound", "boundary", "bounded", "bounds",
    "bounties", "bountiful", "bounty", "bouquet", "bouquets", "bout", "bouts", "bow",
    "bowed", "bowing", "bowl", "bowled", "bowling", "bowls", "bows", "box",
    "boxed", "boxer", "boxers", "boxes", "boxing", "boy", "boyhood", "boys",
    "brace", "braced", "bracelet", "braces", "bracing", "bracket", "brackets", "brag",
    "bragged", "bragging", "brags", "braid", "braided", "braids", "brain", "brains",
    "brainy", "brake", "braked", "brakes", "braking", "bramble", "brambles", "bran",
    "branch", "branched", "branches", "brand", "branded", "brandish", "brands", "brash",
    "brass", "brave", "braved", "bravely", "braver", "bravery", "braves", "bravest",
    "brawl", "brawls", "brawn", "brawny", "breach", "breached", "breaches", "bread",
    "breads", "break", "breaking", "breakout", "breaks", "breakup", "breath", "breathe",
    "breathed", "breathes", "breathing", "breaths", "bred", "breed", "breeder", "breeding",
    "breeds", "breeze", "breezes", "breezy", "brethren", "brevity", "brew", "brewed",
    "brewery", "brewing", "brews", "bribe", "bribed", "bribery", "bribes", "bribing",
    "brick", "bricks", "bridal", "bride", "brides", "bridge", "bridged", "bridges",
    "bridging", "bridle", "brief", "briefed", "briefing", "briefly", "briefs", "brigade",
    "bright", "brighten", "brightens", "brightly", "brim", "brimmed", "brims", "brine",
    "bring", "bringing", "brings", "brink", "brisk", "briskly", "bristle", "bristles",
    "brittle", "broad", "broadcast", "broaden", "broadens", "broadly", "broccoli", "brochure",
    "brochures", "broil", "broiled", "broiler", "broils", "broke", "broken", "broker",
    "brokers", "bronze", "brook", "brooks", "broom", "brooms", "broth", "brother",
    "brothers", "brought", "brow", "brown", "brownie", "browns", "brows", "browse",
    "browsed", "browser", "browses", "browsing", "bruise", "bruised", "bruises", "brunch",
    "brush", "brushed", "brushes", "brushing", "brutal", "brute", "bubble", "bubbled",
    "bubbles", "bubbling", "bubbly", "bucket", "buckets", "buckle", "buckled", "buckles",
    "buckling", "bud", "budding", "budge", "budged", "budges", "budget", "budgeted",
    "budgets", "buds", "buffalo", "buffer", "buffered", "buffers", "buffet", "bug",
    "bugged", "buggy", "bugle", "bugles", "bugs", "build", "builder", "building",
    "builds", "built", "bulb", "bulbs", "bulge", "bulged", "bulges", "bulging",
    "bulk", "bulky", "bull", "bulldog", "bullet", "bulletin", "bullets", "bullfrog",
    "bullied", "bullies", "bulls", "bully", "bumble", "bumbling", "bump", "bumped",
    "bumping", "bumps", "bumpy", "bun", "bunch", "bunched", "bunches", "bundle",
    "bundled", "bundles", "bundling", "bungalow", "bunk", "bunker", "bunks", "bunnies",
    "bunny", "buns", "bunt", "buoy", "buoyant", "buoys", "burden", "burdened",
    "burdens", "bureau", "burger", "burgers", "burglar", "burglars", "burglary", "burial",
    "buried", "buries", "burlap", "burly", "burn", "burned", "burner", "burning",
    "burns", "burrow", "burrowed", "burrows", "burst", "bursting", "bursts", "bury",
    "burying", "bus", "buses", "bush", "bushel", "bushes", "bushy", "busily",
    "business", "bust", "busted", "bustle", "bustled", "bustles", "bustling", "busts",
    "busy", "but", "butler", "butlers", "butter", "buttered", "butters", "button",
    "buttoned", "buttons", "buy", "buyer", "buyers", "buying", "buys", "buzz",
    "buzzed", "buzzer", "buzzes", "buzzing", "bygone", "bypass", "bystander", "cab",
    "cabbage", "cabbages", "cabin", "cabinet", "cabinets", "cabins", "cable", "cabled",
    "cables", "cabs", "cache", "cached", "caches", "caching", "cactus", "caddie",
    "caddy", "cadet", "cadets", "cafe", "cafes", "cage", "caged", "cages",
    "cake", "caked", "cakes", "calcium", "calendar", "calendars", "calf", "call",
    "called", "caller", "callers", "calling", "calls", "calm", "calmed", "calming",
    "calmly", "calms", "calorie", "calories", "calves", "came", "camel", "camels",
    "camera", "cameras", "camp", "camped", "camper", "campers", "campfire", "camping",
    "camps", "campus", "can", "canal", "canals", "canaries", "canary", "cancel",
    "canceled", "cancels", "candid", "candidly", "candied", "candies", "candle", "candles",
    "candy", "cane", "canes", "canine", "canines", "canister", "canned", "canning",
    "cannon", "cannons", "canoe", "canoes", "canopies", "canopy", "cans", "canteen",
    "canvas", "canyon", "canyons", "cap", "capable", "capably", "capacity", "cape",
    "caper", "capers", "capes", "capital", "capitals", "capped", "capping", "caps",
    "capsize", "capsized", "capsule", "capsules", "captain", "captains", "caption", "captions",
    "captive", "captives", "captivity", "capture", "captured", "captures", "capturing", "car",
    "caramel", "caravan", "caravans", "carbon", "card", "carded", "cardigan", "cards",
    "care", "cared", "career", "careers", "carefree", "careful", "careless", "cares",
    "cargo", "caring", "carnival", "carnivals", "carol", "carols", "carp", "carpet",
    "carpeted", "carpets", "carriage", "carriages", "carried", "carrier", "carries", "carrot",
    "carrots", "carry", "carrying", "cars", "cart", "carted", "cartel", "carting",
    "carton", "cartons", "cartoon", "cartoons", "carts", "carve", "carved", "carves",
    "carving", "cascade", "cascaded", "cascades", "case", "cased", "cases", "cash",
    "cashed", "cashier", "cask", "casket", "cast", "casting", "castle", "castles",
    "casts", "casual", "casually", "cat", "catalog", "catalogs", "catapult", "catch",
    "catcher", "catches", "catching", "category", "cater", "catered", "catering", "caters",
    "catlike", "catnap", "catnip", "cats", "cattle", "caught", "cause", "caused",
    "causes", "causing", "caution", "cautioned", "cautions", "cautious", "cavalry", "cave",
    "cavern", "caverns", "caves", "cavity", "cease", "ceased", "ceases", "ceasing",
    "cedar", "cedars", "cede", "ceded", "cedes", "ceding", "ceiling", "ceilings",
    "celery", "cell", "cellar", "cellars", "cello", "cells", "cement", "cemented",
    "census", "cent", "center", "centered", "centers", "central", "cents", "centuries",
    "century", "ceramic", "ceramics", "cereal", "cereals", "ceremony", "certain", "certainly",
    "certainty", "certified", "certify", "chain", "chained", "chaining", "chains", "chair",
    "chaired", "chairman", "chairs", "chalet", "chalk", "chalked", "chalks", "chalky",
    "challenge", "chamber", "chambers", "champion", "champions", "chance", "chanced", "chances",
    "change", "changed", "changes", "changing", "channel", "channels", "chant", "chanted",
    "chanting", "chants", "chaos", "chaotic", "chap", "chapel", "chapels", "chaps",
    "chapter", "chapters", "char", "character", "charcoal", "charge", "charged", "charger",
    "charges", "charging", "chariot", "chariots", "charities", "charity", "charm", "charmed",
    "charming", "charms", "charred", "chars", "chart", "charted", "charter", "charting",
    "charts", "chase", "chased", "chaser", "chases", "chasing", "chasm", "chasms",
    "chat", "chats", "chatted", "chatter", "chattered", "chatters", "chatting", "cheap",
    "cheaper", "cheapest", "cheaply", "cheat", "cheated", "cheater", "cheating", "cheats",
    "check", "checked", "checking", "checks", "checkup", "cheek", "cheeks", "cheeky",
    "cheer", "cheered", "cheerful", "cheering", "cheers", "cheese", "cheeses", "chef",
    "chefs", "chemical", "chemist", "chemistry", "cherish", "cherished", "cherishes", "cherries",
    "cherry", "chess", "chest", "chestnut", "chests", "chew", "chewed", "chewing",
    "chews", "chewy", "chick", "chicken", "chickens", "chicks", "chide", "chided",
    "chief", "chiefly", "chiefs", "child", "childhood", "childish", "children", "chili",
    "chill", "chilled", "chilling", "chills", "chilly", "chime", "chimed", "chimes",
    "chiming", "chimney", "chimneys", "chin", "china", "chins", "chip", "chipmunk",
    "chipmunks", "chipped", "chipping", "chips", "chirp", "chirped", "chirping", "chirps",
    "chisel", "chiseled", "chisels", "chivalry", "chocolate", "choice", "choices", "choir",
    "choirs", "choke", "choked", "chokes", "choking", "choose", "chooses", "choosing",
    "chop", "chopped", "chopper", "chopping", "chops", "chord", "chords", "chore",
    "chores", "chorus", "choruses", "chose", "chosen", "chow", "chowder", "chrome",
    "chronic", "chuckle", "chuckled", "chuckles", "chuckling", "chug", "chugged", "chugs",
    "chunk", "chunks", "chunky", "church", "churches", "churn", "churned", "churning",
    "churns", "chute", "chutes", "cider", "cigar", "cigars", "cinder", "cinders",
    "cinema", "cinemas", "cinnamon", "cipher", "ciphers", "circle", "circled", "circles",
    "circling", "circuit", "circuits", "circus", "circuses", "cite", "cited", "cites",
    "cities", "citing", "citizen", "citizens", "citrus", "city", "civic", "civil",
    "clad", "claim", "claimed", "claiming", "claims", "clam", "clamber", "clambered",
    "clamor", "clamp", "clamped", "clamping", "clamps", "clams", "clan", "clang",
    "clanged", "clangs", "clans", "clap", "clapped", "clapping", "claps", "clarified",
    "clarify", "clarinet", "clarity", "clash", "clashed", "clashes", "clashing", "clasp",
    "clasped", "clasps", "class", "classed", "classes", "classic", "classics", "classify",
    "classroom", "clatter", "clattered", "clause", "clauses", "claw", "clawed", "clawing",
    "claws", "clay", "clean", "cleaned", "cleaner", "cleaning", "cleans", "cleanse",
    "cleanup", "clear", "cleared", "clearing", "clearly", "clears", "cleat", "cleats",
    "clench", "clenched", "clerk", "clerks", "clever", "cleverly", "click", "clicked",
    "clicking", "clicks", "client", "clients", "cliff", "cliffs", "climate", "climates",
    "climax", "climb", "climbed", "climber", "climbing", "climbs", "clinch", "clinched",
    "cling", "clinging", "clings", "clingy", "clinic", "clinical", "clinics", "clink",
    "clinked", "clinks", "clip", "clipped", "clipper", "clipping", "clips", "cloak",
    "cloaked", "cloaks", "clock", "clocked", "clocks", "clog", "clogged", "clogs",
    "clone", "cloned", "clones", "cloning", "close", "closed", "closely", "closer",
    "closes", "closet", "closets", "closing", "closure", "cloth", "clothe", "clothed",
    "clothes", "cloths", "cloud", "clouded", "clouds", "cloudy", "clout", "clover",
    "clovers", "clown", "clowned", "clowns", "club", "clubs", "cluck", "clucked",
    "clucks", "clue", "clueless", "clues", "clump", "clumped", "clumps", "clumsy",
    "clung", "cluster", "clustered", "clusters", "clutch", "clutched", "clutches", "clutter",
    "cluttered", "coach", "coached", "coaches", "coaching", "coal", "coals", "coarse",
    "coarsely", "coast", "coastal", "coaster", "coasts", "coat", "coated", "coating",
    "coats", "coax", "coaxed", "coaxes", "coaxing", "cobalt", "cobbler", "cobweb",
    "cobwebs", "cocoa", "coconut", "coconuts", "cocoon", "cocoons", "cod", "code",
    "coded", "codes", "coding", "coerce", "coerced", "coffee", "coffees", "coffin",
    "coffins", "cog", "cogs", "coherent", "coil", "coiled", "coiling", "coils",
    "coin", "coined", "coins", "cold", "colder", "coldest", "coldly", "colds",
    "collapse", "collapsed", "collar", "collared", "collars", "collect", "collected", "collector",
    "collects", "college", "colleges", "collide", "collided", "collides", "colliding", "colon",
    "colonial", "colonies", "colony", "color", "colored", "colorful", "coloring", "colors",
    "colt", "colts", "column", "columns", "comb", "combat", "combats", "combed",
    "combine", "combined", "combines", "combing", "combining", "combs", "come", "comedian",
    "comedies", "comedy", "comes", "comet", "comets", "comfort", "comforted", "comforts",
    "comfy", "comic", "comical", "comics", "coming", "comma", "command", "commanded",
    "commander", "commands", "commas", "commence", "commenced", "comment", "commented", "comments",
    "commerce", "commit", "commits", "committed", "common", "commonly", "commotion", "communal",
    "commune", "commute", "commuted", "commuter", "commutes", "compact", "companies", "companion",
    "company", "compare", "compared", "compares", "comparing", "compass", "compel", "compelled",
    "compels", "compete", "competed", "competes", "competing", "compile", "compiled", "compiler",
    "compiles", "compiling", "complain", "complains", "complete", "completed", "completes", "complex",
    "complied", "comply", "compose", "composed", "composer", "composes", "compost", "compound",
    "compounds", "compress", "comprise", "comprised", "compute", "computed", "computer", "computes",
    "computing", "comrade", "comrades", "conceal", "concealed", "conceals", "concede", "conceded",
    "concedes", "concept", "concepts", "concern", "concerned", "concerns", "concert", "concerts",
    "concise", "conclude", "concluded", "concludes", "concrete", "condemn", "condemned", "condemns",
    "condense", "condensed", "condition", "condor", "conduct", "conducted", "conductor", "conducts",
    "cone", "cones", "confer", "conferred", "confers", "confess", "confessed", "confesses",
    "confide", "confided", "confides", "confiding", "confine", "confined", "confines", "confirm",
    "confirmed", "confirms", "conflict", "conflicts", "conform", "conformed", "conforms", "confront",
    "confronts", "confuse", "confused", "confuses", "confusing", "congress", "conifer", "conifers",
    "conjure", "conjured", "connect", "connected", "connector", "connects", "conquer", "conquered",
    "conquers", "conquest", "consent", "consented", "consents", "consider", "considers", "consist",
    "consisted", "consists", "console", "consoled", "consoles", "consonant", "conspire", "conspired",
    "constant", "construct", "consult", "consulted", "consults", "consume", "consumed", "consumer",
    "consumes", "contact", "contacted", "contacts", "contain", "contained", "container", "contains",
    "contempt", "contend", "contended", "contends", "content", "contented", "contents", "contest",
    "contested", "contests", "context", "contexts", "continue", "continued", "continues", "contour",
    "contours", "contract", "contracts", "contrary", "contrast", "control", "controls", "convene",
    "convened", "convent", "converge", "converged", "converse", "conversed", "convert", "converted",
    "converts", "convey", "conveyed", "conveys", "convince", "convinced", "convinces", "convoy",
    "convoys", "cook", "cooked", "cookie", "cookies", "cooking", "cooks", "cool",
    "cooled", "cooler", "cooling", "coolly", "cools", "coop", "cooper", "cope",
    "coped", "copes", "copied", "copier", "copies", "coping", "copper", "copy",
    "copying", "coral", "corals", "cord", "cordial", "cords", "core", "cored",
    "cores", "cork", "corked", "corks", "corn", "cornea", "corner", "cornered",
    "corners", "cornfield", "corns", "corps", "corpse", "corral", "corrals", "correct",
    "corrected", "correctly", "corrects", "corridor", "corridors", "corrode", "corroded", "corrupt",
    "corrupted", "cosmic", "cosmos", "cost", "costing", "costly", "costs", "costume",
    "costumes", "cot", "cots", "cottage", "cottages", "cotton", "couch", "couches",
    "cough", "coughed", "coughing", "coughs", "could", "council", "counsel", "counseled",
    "counsels", "count", "counted", "counter", "counties", "counting", "countries", "country",
    "counts", "county", "couple", "coupled", "couples", "coupling", "coupon", "coupons",
    "courage", "courier", "couriers", "course", "courses", "court", "courted", "courtesy",
    "courts", "cousin", "cousins", "cove", "cover", "coverage", "covered", "covering",
    "covers", "coves", "covet", "coveted", "covets", "cow", "coward", "cowardly",
    "cowards", "cowboy", "cowboys", "cower", "cowered", "cowers", "cows", "coyote",
    "coyotes", "cozily", "cozy", "crab", "crabs", "crack", "cracked", "cracker",
    "cracking", "cracks", "cradle", "cradled", "cradles", "craft", "crafted", "crafting",
    "crafts", "crafty", "cram", "crammed", "cramming", "cramp", "cramped", "cramps",
    "crams", "crane", "craned", "cranes", "crank", "cranked", "cranks", "cranky",
    "crash", "crashed", "crashes", "crashing", "crate", "crated", "crater", "craters",
    "crates", "crating", "crave", "craved", "craves", "craving", "crawl", "crawled",
    "crawling", "crawls", "crayon", "crayons", "craze", "crazed", "crazy", "creak",
    "creaked", "creaks", "creaky", "cream", "creams", "creamy", "crease", "creased",
    "creases", "create", "created", "creates", "creating", "creator", "creature", "credit",
    "credited", "credits", "creed", "creeds", "creek", "creeks", "creep", "creeping",
    "creeps", "creepy", "crept", "crescent", "crest", "crested", "crests", "crevice",
    "crevices", "crew", "crews", "crib", "cribs", "cricket", "crickets", "cried",
    "cries", "crime", "crimes", "criminal", "crimson", "cringe", "cringed", "crinkle",
    "crinkled", "cripple", "crippled", "crisis", "crisp", "crisply", "crispy", "critic",
    "critical", "critics", "critique", "croak", "croaked", "croaks", "crochet", "crock",
    "crocus", "crook", "crooked", "crooks", "croon", "crooned", "crop", "cropped",
    "cropping", "crops", "cross", "crossed", "crosses", "crossing", "crouch", "crouched",
    "crouches", "crow", "crowd", "crowded", "crowding", "crowds", "crowed", "crown",
    "crowned", "crowns", "crows", "crucial", "crude", "crudely", "cruel", "cruelly",
    "cruelty", "cruise", "cruised", "cruiser", "cruises", "cruising", "crumb", "crumble",
    "crumbled", "crumbles", "crumbling", "crumbs", "crumple", "crumpled", "crunch", "crunched",
    "crunches", "crunchy", "crusade", "crush", "crushed", "crushes", "crushing", "crust",
    "crusts", "crusty", "crutch", "crutches", "cry", "crying", "crypt", "cryptic",
    "crystal", "crystals", "cub", "cube", "cubed", "cubes", "cubic", "cubicle",
    "cubs", "cuckoo", "cucumber", "cucumbers", "cuddle", "cuddled", "cuddles", "cuddling",
    "cue", "cued", "cues", "cuff", "cuffed", "cuffs", "cuisine", "culprit",
    "culprits", "cult", "cultivate", "cults", "cultural", "culture", "cultures", "cunning",
    "cup", "cupboard", "cupcake", "cupped", "cups", "curb", "curbed", "curbing",
    "curbs", "curd", "curdle", "cure", "cured", "cures", "curfew", "curing",
    "curio", "curious", "curl", "curled", "curling", "curls", "curly", "currant",
    "currency", "current", "currents", "curry", "curse", "cursed", "curses", "cursing",
    "cursor", "cursors", "curt", "curtain", "curtains", "curtly", "curve", "curved",
    "curves", "curving", "cushion", "cushioned", "cushions", "custard", "custody", "custom",
    "customer", "customs", "cut", "cute", "cutely", "cuts", "cutter", "cutting",
    "cycle", "cycled", "cycles", "cycling", "cyclist", "cylinder", "cylinders", "cymbal",
    "cymbals", "cynic", "cynical", "cypress", "dab", "dabbed", "dabble", "dabbled",
    "dabbles", "dabs", "dad", "daddy", "dads", "daffodil", "daffodils", "dagger",
    "daggers", "daily", "dainty", "dairy", "daisies", "daisy", "dale", "dales",
    "dam", "damage", "damaged", "damages", "damaging", "dammed", "damp", "dampen",
    "dampened", "dampens", "dams", "dance", "danced", "dancer", "dancers", "dances",
    "dancing", "dandelion", "danger", "dangerous", "dangers", "dangle", "dangled", "dangles",
    "dangling", "dapper", "dare", "dared", "dares", "daring", "dark", "darken",
    "darkened", "darkens", "darkly", "darkness", "darling", "darn", "dart", "darted",
    "darting", "darts", "dash", "dashed", "dashes", "dashing", "data", "database",
    "date", "dated", "dates", "dating", "daughter", "daughters", "daunt", "daunting",
    "dawdle", "dawdled", "dawn", "dawned", "dawning", "dawns", "day", "daybreak",
    "daydream", "daylight", "days", "daytime", "daze", "dazed", "dazzle", "dazzled",
    "dazzles", "dazzling", "deacon", "dead", "deaden", "deadline", "deadly", "deaf",
    "deafen", "deafening", "deal", "dealer", "dealing", "deals", "dealt", "dean",
    "deans", "dear", "dearly", "debate", "debated", "debates", "debating", "debit",
    "debited", "debits", "debris", "debt", "debtor", "debts", "debug", "debugged",
    "debugging", "debugs", "debut", "debuted", "debuts", "decade", "decades", "decay",
    "decayed", "decaying", "decays", "deceit", "deceitful", "deceive", "deceived", "deceives",
    "decent", "decently", "decide", "decided", "decides", "deciding", "decimal", "decimals",
    "decipher", "deciphers", "decision", "decisions", "decisive", "deck", "decked", "decks",
    "declare", "declared", "declares", "declaring", "decline", "declined", "declines", "declining",
    "decode", "decoded", "decoder", "decodes", "decoding", "decor", "decorate", "decorated",
    "decoy", "decoys", "decrease", "decreased", "decree", "decreed", "decrees", "dedicate",
    "dedicated", "deduce", "deduced", "deduces", "deduct", "deducted", "deducts", "deed",
    "deeds", "deem", "deemed", "deems", "deep", "deepen", "deepened", "deepens",
    "deeper", "deepest", "deeply", "deer", "deface", "defaced", "default", "defaulted",
    "defaults", "defeat", "defeated", "defeating", "defeats", "defect", "defects", "defend",
    "defended", "defender", "defending", "defends", "defense", "defenses", "defer", "deferred",
    "defers", "defiance", "defiant", "deficit", "deficits", "defied", "defies", "define",
    "defined", "defines", "defining", "deflate", "deflated", "deflect", "deflected", "deflects",
    "deform", "deformed", "defrost", "defrosted", "deft", "deftly", "defuse", "defused",
    "defy", "defying", "degrade", "degraded", "degree", "degrees", "dehydrate", "deities",
    "deity", "delay", "delayed", "delaying", "delays", "delegate", "delegated", "delegates",
    "delete", "deleted", "deletes", "deleting", "deletion", "deli", "delicacy", "delicate",
    "delight", "delighted", "delights", "deliver", "delivered", "delivers", "delivery", "delta",
    "deltas", "delude", "deluded", "deluge", "deluxe", "delve", "delved", "delves",
    "delving", "demand", "demanded", "demanding", "demands", "demean", "demeanor", "demise",
    "demo", "democracy", "demolish", "demon", "demons", "demos", "demote", "demoted",
    "demotes", "den", "denied", "denies", "denim", "denote", "denoted", "denotes",
    "denoting", "denounce", "denounced", "dens", "dense", "densely", "density", "dent",
    "dental", "dented", "denting", "dentist", "dentists", "dents", "deny", "denying",
    "depart", "departed", "departing", "departs", "depend", "depended", "depending", "depends",
    "depict", "depicted", "depicting", "depicts", "deplete", "depleted", "deploy", "deployed",
    "deploying", "deploys", "deport", "deported", "deposit", "deposited", "deposits", "depot",
    "depots", "depress", "depressed", "deprive", "deprived", "deprives", "depth", "depths",
    "deputies", "deputy", "derail", "derailed", "derive", "derived", "derives", "deriving",
    "descend", "descended", "descends", "descent", "describe", "described", "describes", "desert",
    "deserted", "deserts", "deserve", "deserved", "deserves", "design", "designed", "designer",
    "designs", "desire", "desired", "desires", "desiring", "desk", "desks", "desktop",
    "desolate", "despair", "despaired", "despairs", "despise", "despised", "despises", "despite",
    "dessert", "desserts", "destined", "destiny", "destroy", "destroyed", "destroyer", "destroys",
    "detach", "detached", "detaches", "detail", "detailed", "detailing", "details", "detain",
    "detained", "detains", "detect", "detected", "detector", "detects", "deter", "deterred",
    "deters", "detest", "detested", "detests", "detour", "detours", "devalue", "devalued",
    "develop", "developed", "developer", "develops", "device", "devices", "devise", "devised",
    "devises", "devising", "devote", "devoted", "devotes", "devotion", "devour", "devoured",
    "devours", "dew", "dewdrop", "dewy", "diagnose", "diagnosis", "diagonal", "diagram",
    "diagrams", "dial", "dialect", "dialects", "dialed", "dialing", "dialog", "dialogue",
    "dials", "diameter", "diamond", "diamonds", "diaper", "diapers", "diaries", "diary",
    "dice", "diced", "dicing", "dictate", "dictated", "dictates", "did", "die",
    "died", "dies", "diesel", "diet", "dieted", "diets", "differ", "differed",
    "differing", "differs", "dig", "digest", "digested", "digests", "digger", "digging",
    "digit", "digital", "digits", "dignified", "dignity", "digs", "dilemma", "dilemmas",
    "dilute", "diluted", "dilutes", "diluting", "dim", "dime", "dimes", "dimly",
    "dimmed", "dimmer", "dimming", "dimple", "dimpled", "dimples", "dims", "din",
    "dine", "dined", "diner", "diners", "dines", "dinghy", "dining", "dinner",
    "dinners", "dinosaur", "dinosaurs", "dip", "diploma", "diplomas", "diplomat", "dipped",
    "dipper", "dipping", "dips", "dire", "direct", "directed", "directly", "director",
    "directs", "dirt", "dirty", "disable", "disabled", "disagree", "disagreed", "disarm",
    "disarmed", "disarms", "disaster", "disasters", "disband", "disbanded", "discard", "discarded",
    "discards", "discern", "discerned", "discerns", "disclose", "disclosed", "disco", "discount",
    "discounts", "discover", "discovers", "discreet", "discrete", "discuss", "discussed", "discusses",
    "disdain", "disease", "diseased", "diseases", "disguise", "disguised", "disgust", "disgusted",
    "disgusts", "dish", "dished", "dishes", "dishonest", "disinfect", "disk", "disks",
    "dislike", "disliked", "dislikes", "dislodge", "dislodged", "dismal", "dismally", "dismay",
    "dismayed", "dismiss", "dismissed", "dismisses", "disobey", "disobeyed", "disorder", "disorders",
    "dispatch", "dispel", "dispelled", "dispels", "dispense", "dispensed", "dispenser", "disperse",
    "dispersed", "displace", "displaced", "display", "displayed", "displays", "disposal", "dispose",
    "disposed", "disposes", "dispute", "disputed", "disputes", "disrupt", "disrupted", "disrupts",
    "dissect", "dissected", "dissent", "dissolve", "dissolved", "distance", "distances", "distant",
    "distill", "distilled", "distinct", "distort", "distorted", "distorts", "distract", "distracts",
    "distress", "district", "districts", "disturb", "disturbed", "disturbs", "ditch", "ditched",
    "ditches", "ditto", "ditty", "dive", "dived", "diver", "diverge", "diverged",
    "diverges", "divers", "diverse", "diversify", "diversity", "divert", "diverted", "diverts",
    "dives", "divide", "divided", "divides", "dividing", "divine", "divinely", "diving",
    "division", "divisions", "divorce", "divorced", "dizzily", "dizzy", "dock", "docked",
    "docking", "docks", "doctor", "doctored", "doctors", "doctrine", "document", "documents",
    "dodge", "dodged", "dodges", "dodging", "doe", "does", "dog", "dogged",
    "doghouse", "dogma", "dogs", "doily", "doing", "dole", "doled", "doll",
    "dollar", "dollars", "dollhouse", "dollop", "dolls", "dolphin", "dolphins", "domain",
    "domains", "dome", "domed", "domes", "domestic", "dominant", "dominate", "dominated",
    "domino", "dominos", "don", "donate", "donated", "donates", "donating", "donation",
    "done", "donkey", "donkeys", "donned", "donor", "dons", "donut", "donuts",
    "doodle", "doodled", "doodles", "doodling", "doom", "doomed", "door", "doorbell",
    "doorknob", "doorman", "doormat", "doors", "doorstep", "doorway", "dormant", "dosage",
    "dose", "doses", "dot", "dote", "doted", "dotes", "doting", "dots",
    "dotted", "dotting", "double", "doubled", "doubles", "doubling", "doubly", "doubt",
    "doubted", "doubtful", "doubting", "doubts", "dough", "dove", "doves", "down",
    "downed", "downfall", "downhill", "download", "downpour", "downriver", "downs", "downsize",
    "downtown", "downward", "dowry", "doze", "dozed", "dozen", "dozens", "dozes",
    "dozing", "drab", "draft", "drafted", "drafting", "drafts", "drag", "dragged",
    "dragging", "dragon", "dragonfly", "dragons", "drags", "drain", "drainage", "drained",
    "draining", "drains", "drama", "dramas", "dramatic", "drank", "drape", "draped",
    "drapes", "draping", "drastic", "draw", "drawer", "drawers", "drawing", "drawl",
    "drawn", "draws", "dread", "dreaded", "dreadful", "dreads", "dream", "dreamed",
    "dreamer", "dreaming", "dreams", "dreamy", "dreary", "dredge", "dredged", "drench",
    "drenched", "drenches", "dress", "dressed", "dresser", "dresses", "dressing", "drew",
    "dribble", "dribbled", "dribbles", "dribbling", "dried", "drier", "dries", "drift",
    "drifted", "drifter", "drifting", "drifts", "drill", "drilled", "drilling", "drills",
    "drink", "drinker", "drinking", "drinks", "drip", "dripped", "dripping", "drips",
    "drive", "driven", "driver", "drivers", "drives", "driveway", "driveways", "driving",
    "drizzle", "drizzled", "drizzles", "drizzly", "drone", "droned", "drones", "droning",
    "drool", "drooled", "drooling", "drools", "droop", "drooped", "drooping", "droops",
    "droopy", "drop", "droplet", "dropout", "dropped", "dropping", "drops", "drought",
    "droughts", "drove", "droves", "drown", "drowned", "drowning", "drowns", "drowsy",
    "drudge", "drudgery", "drug", "drugged", "drugs", "drum", "drummed", "drummer",
    "drumming", "drums", "drunk", "dry", "dryer", "drying", "dryly", "dryness",
    "dual", "dub", "dubbed", "dubbing", "dubious", "dubs", "duchess", "duck",
    "ducked", "ducking", "duckling", "ducks", "duct", "ducts", "dud", "dude",
    "dudes", "due", "duel", "dueling", "duels", "dues", "duet", "duets",
    "dug", "dugout", "duke", "dukes", "dull", "dulled", "dullest", "dulls",
    "duly", "dumb", "dumbly", "dummies", "dummy", "dump", "dumped", "dumping",
    "dumpling", "dumplings", "dumps", "dune", "dunes", "dungeon", "dungeons", "dunk",
    "dunked", "dunking", "dunks", "duo", "dupe", "duped", "duplex", "duplicate",
    "durable", "duration", "during", "dusk", "dusky", "dust", "dusted", "dusting",
    "dustpan", "dusts", "dusty", "duties", "dutiful", "duty", "dwarf", "dwarfs",
    "dwell", "dweller", "dwelling", "dwells", "dwindle", "dwindled", "dwindles", "dwindling",
    "dye", "dyed", "dyeing", "dyes", "dying", "dynamic", "dynamics", "dynamite",
    "dynamo", "dynasty", "each", "eager", "eagerly", "eagle", "eagles", "ear",
    "eardrum", "earlier", "earliest", "earlobe", "early", "earn", "earned", "earnest",
    "earnestly", "earning", "earnings", "earns", "ears", "earth", "earthen", "earthly",
    "earthworm", "ease", "eased", "easel", "easels", "eases", "easier", "easiest",
    "easily", "easing", "east", "eastern", "eastward", "easy", "eat", "eaten",
    "eater", "eating", "eats", "eaves", "ebb", "ebbed", "ebbing", "ebbs",
    "ebony", "eccentric", "echo", "echoed", "echoes", "echoing", "eclipse", "eclipsed",
    "eclipses", "economic", "economies", "economy", "edge", "edged", "edges", "edging",
    "edgy", "edible", "edict", "edicts", "edit", "edited", "editing", "edition",
    "editor", "editors", "edits", "educate", "educated", "educates", "educator", "eel",
    "eels", "eerie", "eerily", "effect", "effective", "effects", "effort", "efforts",
    "egg", "eggplant", "eggs", "eggshell", "ego", "egos", "eight", "eighth",
    "eighty", "either", "eject", "ejected", "ejecting", "ejects", "elaborate", "elapse",
    "elapsed", "elapses", "elastic", "elated", "elbow", "elbowed", "elbows", "elder",
    "elderly", "elders", "eldest", "elect", "elected", "electing", "election", "electric",
    "electron", "elects", "elegance", "elegant", "element", "elements", "elephant", "elephants",
    "elevate", "elevated", "elevates", "elevator", "eleven", "eleventh", "elf", "elicit",
    "elicited", "elicits", "eligible", "elite", "elk", "elm", "elms", "elope",
    "eloped", "elopes", "eloquent", "else", "elsewhere", "elude", "eluded", "eludes",
    "eluding", "elusive", "elves", "email", "emailed", "emails", "embark", "embarked",
    "embarks", "embassy", "embed", "embedded", "embeds", "ember", "embers", "emblem",
    "emblems", "embodied", "embody", "emboss", "embossed", "embrace", "embraced", "embraces",
    "embracing", "embroider", "emerald", "emeralds", "emerge", "emerged", "emerges", "emerging",
    "emigrate", "eminent", "emit", "emits", "emitted", "emitting", "emotion", "emotional",
    "emotions", "emperor", "emperors", "emphasis", "emphasize", "empire", "empires", "employ",
    "employed", "employee", "employer", "employs", "empower", "empowered", "empowers", "emptied",
    "empties", "empty", "emptying", "emulate", "emulated", "emulates", "enable", "enabled",
    "enables", "enabling", "enact", "enacted", "enacting", "enacts", "enamel", "encase",
    "encased", "enchant", "enchanted", "enchants", "encircle", "encircled", "enclose", "enclosed",
    "encloses", "enclosure", "encode", "encoded", "encoder", "encodes", "encoding", "encore",
    "encores", "encounter", "encourage", "encrypt", "encrypted", "encrypts", "end", "endear",
    "endearing", "endeavor", "endeavors", "ended", "ending", "endings", "endless", "endorse",
    "endorsed", "endorses", "endow", "endowed", "endows", "ends", "endure", "endured",
    "endures", "enduring", "enemies", "enemy", "energetic", "energies", "energy", "enforce",
    "enforced", "enforces", "engage", "engaged", "engages", "engaging", "engine", "engineer",
    "engineers", "engines", "engrave", "engraved", "engraves", "engraving", "engulf", "engulfed",
    "engulfs", "enhance", "enhanced", "enhances", "enhancing", "enigma", "enjoy", "enjoyed",
    "enjoying", "enjoyment", "enjoys", "enlarge", "enlarged", "enlarges", "enlighten", "enlist",
    "enlisted", "enlists", "enormous", "enough", "enrage", "enraged", "enrich", "enriched",
    "enriches", "enroll", "enrolled", "enrolls", "ensemble", "ensue", "ensued", "ensues",
    "ensuing", "ensure", "ensured", "ensures", "ensuring", "entail", "entailed", "entails",
    "enter", "entered", "entering", "enters", "entice", "enticed", "entices", "enticing",
    "entire", "entirely", "entirety", "entities", "entitle", "entitled", "entitles", "entity",
    "entrance", "entrances", "entrap", "entreat", "entries", "entrust", "entrusted", "entry",
    "envelop", "envelope", "envelopes", "envied", "envies", "envious", "envision", "envoy",
    "envoys", "envy", "enzyme", "enzymes", "epic", "epics", "episode", "episodes",
    "equal", "equaled", "equally", "equals", "equation", "equations", "equator", "equip",
    "equipped", "equips", "equity", "era", "eras", "erase", "erased", "eraser",
    "erases", "erasing", "erect", "erected", "erecting", "erects", "erode", "eroded",
    "erodes", "eroding", "erosion", "errand", "errands", "erratic", "error", "errors",
    "erupt", "erupted", "erupting", "erupts", "escalate", "escalated", "escalator", "escape",
    "escaped", "escapes", "escaping", "escort", "escorted", "escorts", "essay", "essayist",
    "essays", "essence", "essential", "establish", "estate", "estates", "esteem", "esteemed",
    "estimate", "estimated", "estimates", "etch", "etched", "etches", "etching", "eternal",
    "eternally", "eternity", "ether", "ethereal", "ethic", "ethical", "ethics", "etiquette",
    "evacuate", "evacuated", "evade", "evaded", "evades", "evading", "evaluate", "evaluated",
    "evaluates", "evaporate", "eve", "even", "evening", "evenings", "evenly", "evens",
    "event", "eventful", "events", "ever", "evermore", "every", "everybody", "everyday",
    "everyone", "eves", "evict", "evicted", "evicts", "evidence", "evident", "evil",
    "evils", "evoke", "evoked", "evokes", "evoking", "evolve", "evolved", "evolves",
    "evolving", "exact", "exactly", "exalt", "exalted", "exam", "examine", "examined",
    "examines", "example", "examples", "exams", "exceed", "exceeded", "exceeding", "exceeds",
    "excel", "excelled", "excels", "except", "exception", "excerpt", "excerpts", "excess",
    "excesses", "excessive", "exchange", "exchanged", "excite", "excited", "excites", "exciting",
    "exclaim", "exclaimed", "exclaims", "exclude", "excluded", "excludes", "excuse", "excused",
    "excuses", "excusing", "execute", "executed", "executes", "exempt", "exercise", "exercised",
    "exert", "exerted", "exerting", "exerts", "exhale", "exhaled", "exhales", "exhaling",
    "exhaust", "exhausted", "exhausts", "exhibit", "exhibited", "exhibits", "exile", "exiled",
    "exiles", "exist", "existed", "existing", "exists", "exit", "exited", "exiting",
    "exits", "exotic", "expand", "expanded", "expanding", "expands", "expanse", "expect",
    "expected", "expecting", "expects", "expedite", "expel", "expelled", "expels", "expense",
    "expenses", "expensive", "expert", "expertise", "experts", "expire", "expired", "expires",
    "expiring", "explain", "explained", "explains", "explicit", "explode", "exploded", "explodes",
    "exploit", "exploited", "exploits", "explore", "explored", "explorer", "explores", "export",
    "exported", "exporting", "exports", "expose", "exposed", "exposes", "exposing", "express",
    "expressed", "expresses", "extend", "extended", "extending", "extends", "extent", "exterior",
    "external", "extinct", "extra", "extract", "extracted", "extracts", "extras", "extreme",
    "extremely", "extremes", "eye", "eyeball", "eyebrow", "eyed", "eyeing", "eyelash",
    "eyelid", "eyes", "eyesight", "fable", "fabled", "fables", "fabric", "fabrics",
    "fabulous", "facade", "face", "faced", "faces", "facet", "facets", "facial",
    "facing", "fact", "factor", "factories", "factors", "factory", "facts", "factual",
    "faculty", "fad", "fade", "faded", "fades", "fading", "fads", "fail",
    "failed", "failing", "fails", "failure", "failures", "faint", "fainted", "faintly",
    "faints", "fair", "fairies", "fairly", "fairness", "fairway", "fairy", "faith",
    "faithful", "faiths", "fake", "faked", "fakes", "faking", "falcon", "falcons",
    "fall", "fallen", "falling", "fallout", "falls", "false", "falsely", "falsify",
    "falter", "faltered", "falters", "fame", "famed", "familiar", "families", "family",
    "famine", "famous", "fan", "fancied", "fanciful", "fancy", "fanfare", "fang",
    "fangs", "fanned", "fanning", "fans", "fantastic", "fantasy", "far", "farce",
    "fare", "fared", "fares", "farewell", "faring", "farm", "farmed", "farmer",
    "farmers", "farmhouse", "farming", "farmland", "farms", "farmyard", "fascinate", "fashion",
    "fashioned", "fashions", "fast", "fasted", "fasten", "fastened", "fastens", "faster",
    "fastest", "fasting", "fasts", "fat", "fatal", "fatality", "fatally", "fate",
    "fated", "father", "fatherly", "fathers", "fathom", "fathomed", "fathoms", "fatigue",
    "fatigued", "fats", "fatten", "fatty", "faucet", "faucets", "fault", "faulted",
    "faults", "faulty", "fauna", "favor", "favored", "favoring", "favorite", "favors",
    "fawn", "fawns", "fax", "faxed", "faxes", "fear", "feared", "fearful",
    "fearing", "fearless", "fears", "feasible", "feast", "feasted", "feasting", "feasts",
    "feat", "feather", "feathered", "feathers", "feathery", "feats", "feature", "featured",
    "features", "fed", "federal", "fee", "feeble", "feed", "feeder", "feeding",
    "feeds", "feel", "feeling", "feelings", "feels", "fees", "feet", "feign",
    "feigned", "feigns", "feline", "felines", "fell", "felled", "fellow", "fellows",
    "fells", "felon", "felony", "felt", "female", "females", "fence", "fenced",
    "fences", "fencing", "fend", "fended", "fender", "fends", "fern", "ferns",
    "ferocious", "ferret", "ferrets", "ferried", "ferries", "ferry", "fertile", "fertility",
    "fervent", "fervor", "festival", "festive", "fetch", "fetched", "fetches", "fetching",
    "feud", "feuds", "fever", "feverish", "fevers", "few", "fewer", "fewest",
    "fiasco", "fib", "fibbed", "fiber", "fibers", "fibs", "fickle", "fiction",
    "fictional", "fiddle", "fiddled", "fiddler", "fiddles", "fiddling", "fidget", "fidgeted",
    "fidgets", "field", "fielded", "fielder", "fielding", "fields", "fiend", "fiends",
    "fierce", "fiercely", "fiery", "fiesta", "fifteen", "fifth", "fifty", "fig",
    "fight", "fighter", "fighting", "fights", "figment", "figs", "figure", "figured",
    "figures", "figuring", "filament", "file", "filed", "files", "filing", "fill",
    "filled", "filler", "fillet", "filling", "fills", "filly", "film", "filmed",
    "filming", "films", "filter", "filtered", "filtering", "filters", "filth", "filthy",
    "fin", "final", "finale", "finally", "finals", "finance", "financed", "finances",
    "finch", "finches", "find", "finder", "finding", "findings", "finds", "fine",
    "fined", "finely", "finer", "fines", "finesse", "finest", "finger", "fingered",
    "fingers", "fingertip", "finish", "finished", "finishes", "finishing", "finite", "fins",
    "fir", "fire", "fired", "firefly", "fireman", "fireplace", "fires", "firewood",
    "fireworks", "firing", "firm", "firmly", "firmness", "firms", "firs", "first",
    "firstly", "fish", "fished", "fisherman", "fishery", "fishes", "fishing", "fist",
    "fistful", "fists", "fit", "fitness", "fits", "fitted", "fitting", "five",
    "fix", "fixed", "fixes", "fixing", "fixture", "fizz", "fizzed", "fizzes",
    "fizzle", "fizzled", "fizzy", "flag", "flagged", "flagging", "flagpole", "flags",
    "flail", "flailed", "flails", "flair", "flake", "flaked", "flakes", "flaky",
    "flame", "flamed", "flames", "flaming", "flamingo", "flank", "flanked", "flanks",
    "flannel", "flap", "flapped", "flapping", "flaps", "flare", "flared", "flares",
    "flaring", "flash", "flashed", "flashes", "flashing", "flashy", "flask", "flasks",
    "flat", "flatly", "flats", "flatten", "flattens", "flatter", "flattered", "flatters",
    "flattery", "flaunt", "flaunted", "flaunts", "flavor", "flavored", "flavoring", "flavors",
    "flaw", "flawed", "flawless", "flaws", "flea", "fleas", "fleck", "flecked",
    "flecks", "fled", "flee", "fleece", "fleeced", "fleeces", "fleeing", "flees",
    "fleet", "fleeting", "fleets", "flesh", "fleshy", "flew", "flex", "flexed",
    "flexes", "flexible", "flexing", "flick", "flicked", "flicker", "flickered", "flickers",
    "flicking", "flicks", "flier", "flies", "flight", "flights", "flimsy", "flinch",
    "flinched", "flinches", "fling", "flinging", "flings", "flint", "flints", "flip",
    "flipped", "flipper", "flipping", "flips", "flirt", "flirted", "flirting", "flirts",
    "flit", "flits", "flitted", "float", "floated", "floating", "floats", "flock",
    "flocked", "flocking", "flocks", "flog", "flogged", "flood", "flooded", "flooding",
    "floods", "floor", "floored", "flooring", "floors", "flop", "flopped", "flopping",
    "floppy", "flops", "flora", "floral", "florist", "florists", "floss", "flossed",
    "flounder", "flour", "floured", "flourish", "flow", "flowed", "flower", "flowerbed",
    "flowered", "flowerpot", "flowers", "flowery", "flowing", "flows", "flu", "flue",
    "fluent", "fluently", "fluff", "fluffed", "fluffs", "fluffy", "fluid", "fluids",
    "fluke", "flung", "flurries", "flurry", "flush", "flushed", "flushes", "flushing",
    "flute", "flutes", "flutist", "flutter", "fluttered", "flutters", "flux", "fly",
    "flyer", "flying", "foal", "foals", "foam", "foamed", "foaming", "foams",
    "foamy", "focal", "focus", "focused", "focuses", "focusing", "fodder", "foe",
    "foes", "fog", "fogged", "foggy", "foghorn", "fogs", "foil", "foiled",
    "foiling", "foils", "fold", "folded", "folder", "folding", "folds", "foliage",
    "folk", "folklore", "folks", "follow", "followed", "follower", "following", "follows",
    "folly", "fond", "fondly", "fondness", "font", "fonts", "food", "foods",
    "fool", "fooled", "fooling", "foolish", "fools", "foot", "footage", "football",
    "foothill", "footing", "footnote", "footpath", "footprint", "footstep", "footwear", "for",
    "forage", "foraged", "foray", "forays", "forbid", "forbidden", "forbids", "force",
    "forced", "forceful", "forces", "forcing", "ford", "forded", "fords", "forecast",
    "forecasts", "forefront", "forego", "foregone", "foreign", "foreigner", "foreman", "foremost",
    "forensic", "foresee", "foreseen", "foresight", "forest", "forested", "forestry", "forests",
    "foretell", "foretold", "forever", "forfeit", "forfeited", "forfeits", "forgave", "forge",
    "forged", "forgery", "forges", "forget", "forgetful", "forgets", "forging", "forgive",
    "forgiven", "forgives", "forgot", "forgotten", "fork", "forked", "forking", "forks",
    "forlorn", "form", "formal", "formally", "format", "formats", "formed", "former",
    "formerly", "forming", "forms", "formula", "formulas", "fort", "forth", "fortified",
    "fortify", "fortress", "forts", "fortunate", "fortune", "fortunes", "forty", "forum",
    "forums", "forward", "forwarded", "forwards", "fossil", "fossils", "foster", "fostered",
    "fostering", "fosters", "fought", "foul", "fouled", "fouling", "fouls", "found",
    "founded", "founder", "founding", "founds", "fountain", "fountains", "four", "fours",
    "fourteen", "fourth", "fowl", "fox", "foxes", "foyer", "fraction", "fractions",
    "fracture", "fractured", "fractures", "fragile", "fragment", "fragments", "fragrance", "fragrant",
    "frail", "frailty", "frame", "framed", "frames", "framing", "franchise", "frank",
    "frankly", "frantic", "fraud", "frauds", "fraught", "fray", "frayed", "fraying",
    "frays", "freckle", "freckled", "freckles", "free", "freed", "freedom", "freeing",
    "freely", "freer", "frees", "freest", "freeway", "freeways", "freeze", "freezer",
    "freezes", "freezing", "freight", "freighter", "frenzied", "frenzy", "frequency", "frequent",
    "fresh", "freshen", "freshly", "freshman", "fret", "frets", "fretted", "fretting",
    "friar", "friars", "friction", "fried", "friend", "friendly", "friends", "fries",
    "fright", "frighten", "frightens", "frigid", "frill", "frills", "frilly", "fringe",
    "fringed", "fringes", "frisky", "fritter", "fritters", "frivolous", "frog", "frogs",
    "frolic", "frolics", "from", "front", "frontal", "frontier", "fronts", "frost",
    "frosted", "frosting", "frosts", "frosty", "froth", "frothy", "frown", "frowned",
    "frowning", "frowns", "froze", "frozen", "frugal", "fruit", "fruitful", "fruits",
    "fruity", "frustrate", "fry", "frying", "fudge", "fuel", "fueled", "fueling",
    "fuels", "fugitive", "fulfill", "fulfilled", "fulfills", "full", "fuller", "fullest",
    "fullness", "fully", "fumble", "fumbled", "fumbles", "fumbling", "fume", "fumed",
    "fumes", "fuming", "fun", "function", "functions", "fund", "funded", "funding",
    "funds", "fungal", "fungus", "funnel", "funneled", "funnels", "funnier", "funny",
    "fur", "furious", "furiously", "furnace", "furnaces", "furnish", "furnished", "furniture",
    "furrow", "furrowed", "furrows", "furry", "furs", "further", "furthest", "fury",
    "fuse", "fused", "fuses", "fusing", "fusion", "fuss", "fussed", "fusses",
    "fussy", "futile", "future", "futures", "fuzz", "fuzzy", "gadget", "gadgets",
    "gag", "gagged", "gags", "gain", "gained", "gaining", "gains", "gait",
    "gala", "galas", "galaxies", "galaxy", "gale", "gales", "gallant", "galleries",
    "gallery", "galley", "galleys", "gallon", "gallons", "gallop", "galloped", "gallops",
    "gamble", "gambled", "gambler", "gambles", "gambling", "game", "games", "gaming",
    "gander", "gang", "gangs", "gap", "gape", "gaped", "gapes", "gaping",
    "gaps", "garage", "garages", "garb", "garbage", "garden", "gardened", "gardener",
    "gardens", "gargle", "gargled", "garland", "garlands", "garlic", "garment", "garments",
    "garnish", "garnished", "gas", "gases", "gash", "gashed", "gashes", "gasoline",
    "gasp", "gasped", "gasping", "gasps", "gate", "gates", "gateway", "gather",
    "gathered", "gathering", "gathers", "gauge", "gauged", "gauges", "gauging", "gaunt",
    "gave", "gavel", "gawk", "gawked", "gaze", "gazebo", "gazed", "gazelle",
    "gazelles", "gazes", "gazing", "gear", "geared", "gearing", "gears", "gecko",
    "geckos", "gel", "gels", "gem", "gems", "gemstone", "gender", "genders",
    "gene", "general", "generally", "generals", "generate", "generated", "generator", "generic",
    "generous", "genes", "genetic", "genius", "geniuses", "genre", "genres", "gentle",
    "gentler", "gently", "genuine", "genuinely", "geologic", "geology", "geometry", "germ",
    "germs", "gesture", "gestured", "gestures", "get", "getaway", "gets", "getting",
    "geyser", "geysers", "ghost", "ghostly", "ghosts", "giant", "giants", "giddy",
    "gift", "gifted", "gifts", "gig", "giggle", "giggled", "giggles", "giggling",
    "gigs", "gild", "gilded", "gill", "gills", "gimmick", "gimmicks", "ginger",
    "giraffe", "giraffes", "girder", "girders", "girl", "girlhood", "girls", "give",
    "given", "giver", "gives", "giving", "glacial", "glacier", "glaciers", "glad",
    "gladden", "glade", "glades", "gladly", "glamorous", "glamour", "glance", "glanced",
    "glances", "glancing", "gland", "glands", "glare", "glared", "glares", "glaring",
    "glass", "glasses", "glassy", "glaze", "glazed", "glazes", "glazing", "gleam",
    "gleamed", "gleaming", "gleams", "glean", "gleaned", "glee", "gleeful", "glen",
    "glens", "glide", "glided", "glider", "glides", "gliding", "glimmer", "glimmered",
    "glimmers", "glimpse", "glimpsed", "glimpses", "glint", "glinted", "glints", "glisten",
    "glistened", "glistens", "glitch", "glitches", "glitter", "glittered", "glitters", "gloat",
    "gloated", "gloats", "glob", "global", "globally", "globe", "globes", "gloom",
    "gloomy", "glories", "glorify", "glorious", "glory", "gloss", "glossy", "glove",
    "gloved", "gloves", "glow", "glowed", "glowing", "glows", "glue", "glued",
    "glues", "gluing", "glum", "glumly", "gnarled", "gnat", "gnats", "gnaw",
    "gnawed", "gnawing", "gnaws", "gnome", "gnomes", "goal", "goalie", "goals",
    "goat", "goats", "gobble", "gobbled", "gobbles", "goblet", "goblets", "goblin",
    "goblins", "god", "goddess", "gods", "goes", "going", "gold", "golden",
    "goldfish", "golf", "golfer", "golfing", "gondola", "gone", "gong", "gongs",
    "good", "goodbye", "goodness", "goods", "goodwill", "goose", "gopher", "gophers",
    "gore", "gorge", "gorged", "gorgeous", "gorges", "gorilla", "gorillas", "gosling",
    "gospel", "gossip", "gossiped", "gossips", "got", "gotten", "gourd", "gourds",
    "gourmet", "govern", "governed", "governor", "governs", "gown", "gowns", "grab",
    "grabbed", "grabbing", "grabs", "grace", "graced", "graceful", "graces", "gracious",
    "grade", "graded", "grades", "grading", "gradual", "gradually", "graduate", "graduated",
    "graduates", "graft", "grafted", "grafts", "grain", "grains", "grainy", "grammar",
    "grand", "grander", "grandest", "grandeur", "grandly", "granite", "grant", "granted",
    "granting", "grants", "grape", "grapes", "grapevine", "graph", "graphic", "graphics",
    "graphs", "grapple", "grappled", "grasp", "grasped", "grasping", "grasps", "grass",
    "grasses", "grassy", "grate", "grated", "grateful", "grates", "gratified", "gratify",
    "grating", "gravel", "graveyard", "gravity", "gravy", "gray", "grayed", "grayish",
    "grays", "graze", "grazed", "grazes", "grazing", "grease", "greased", "greases",
    "greasy", "great", "greater", "greatest", "greatly", "greed", "greedy", "green",
    "greener", "greenery", "greens", "greet", "greeted", "greeting", "greets", "grew",
    "grid", "gridlock", "grids", "grief", "grieve", "grieved", "grieves", "grieving",
    "grill", "grilled", "grilling", "grills", "grim", "grime", "grimly", "grimy",
    "grin", "grind", "grinder", "grinding", "grinds", "grinned", "grinning", "grins",
    "grip", "gripe", "griped", "gripes", "gripped", "gripping", "grips", "grit",
    "grits", "gritty", "grizzly", "groan", "groaned", "groaning", "groans", "grocer",
    "groceries", "grocery", "groggy", "groom", "groomed", "grooming", "grooms", "groove",
    "grooved", "grooves", "groovy", "grope", "groped", "gross", "grossly", "ground",
    "grounded", "grounding", "grounds", "group", "grouped", "grouping", "groups", "grout",
    "grove", "grovel", "groves", "grow", "grower", "growing", "growl", "growled",
    "growling", "growls", "grown", "grows", "growth", "grub", "grubby", "grubs",
    "grudge", "grudges", "grueling", "gruff", "gruffly", "grumble", "grumbled", "grumbles",
    "grumbling", "grumpy", "grunt", "grunted", "grunting", "grunts", "guard", "guarded",
    "guardian", "guarding", "guards", "guava", "guess", "guessed", "guesses", "guessing",
    "guest", "guests", "guidance", "guide", "guided", "guides", "guiding", "guild",
    "guilds", "guile", "guilt", "guilty", "guise", "guitar", "guitars", "gulch",
    "gulf", "gulfs", "gull", "gullible", "gullies", "gulls", "gully", "gulp",
    "gulped", "gulping", "gulps", "gum", "gummy", "gumption", "gums", "gun",
    "gunner", "guns", "gurgle", "gurgled", "gurgles", "guru", "gurus", "gush",
    "gushed", "gushes", "gushing", "gust", "gusted", "gusts", "gusty", "gut",
    "guts", "gutter", "gutters", "guy", "guys", "guzzle", "guzzled", "gym",
    "gymnast", "gyms", "habit", "habitat", "habits", "habitual", "hack", "hacked",
    "hacker", "hacking", "hacks", "had", "haggle", "haggled", "haggles", "haggling",
    "hail", "hailed", "hailing", "hails", "hair", "haircut", "hairdo", "hairs",
    "hairy", "half", "hall", "hallmark", "halls", "hallway", "halo", "halos",
    "halt", "halted", "halter", "halting", "halts", "halve", "halved", "halves",
    "ham", "hamlet", "hammer", "hammered", "hammers", "hammock", "hammocks", "hamper",
    "hampered", "hampers", "hams", "hamster", "hamsters", "hand", "handbag", "handbook",
    "handed", "handful", "handgun", "handing", "handle", "handled", "handler", "handles",
    "handling", "handmade", "handout", "handrail", "hands", "handshake", "handsome", "handy",
    "hang", "hangar", "hanger", "hanging", "hangs", "hanker", "haphazard", "happen",
    "happened", "happening", "happens", "happier", "happiest", "happily", "happy", "harbor",
    "harbored", "harbors", "hard", "harden", "hardened", "hardens", "harder", "hardest",
    "hardly", "hardship", "hardware", "hardwood", "hardy", "hare", "hares", "hark",
    "harm", "harmed", "harmful", "harming", "harmless", "harmonic", "harmony", "harms",
    "harness", "harnessed", "harp", "harpist", "harpoon", "harps", "harsh", "harshly",
    "harvest", "harvested", "harvests", "has", "hassle", "hassles", "haste", "hasten",
    "hastens", "hastily", "hasty", "hat", "hatch", "hatched", "hatches", "hatchet",
    "hatching", "hate", "hated", "hateful", "hates", "hating", "hatred", "hats",
    "haughty", "haul", "hauled", "hauling", "hauls", "haunt", "haunted", "haunting",
    "haunts", "have", "haven", "havens", "having", "havoc", "hawk", "hawks",
    "hay", "haystack", "hazard", "hazardous", "hazards", "haze", "hazel", "hazy",
    "head", "headache", "headband", "headed", "headfirst", "heading", "headlight", "headline",
    "headphone", "headrest", "heads", "headway", "heal", "healed", "healer", "healing",
    "heals", "health", "healthy", "heap", "heaped", "heaping", "heaps", "hear",
    "heard", "hearing", "hears", "hearse", "heart", "heartbeat", "heartfelt", "hearth",
    "hearts", "hearty", "heat", "heated", "heater", "heating", "heats", "heave",
    "heaved", "heaven", "heavenly", "heavens", "heaves", "heavier", "heaviest", "heavily",
    "heaving", "heavy", "heckle", "heckled", "hectic", "hedge", "hedged", "hedgehog",
    "hedges", "heed", "heeded", "heedless", "heeds", "heel", "heels", "hefty",
    "heifer", "height", "heighten", "heights", "heir", "heiress", "heirloom", "heirs",
    "held", "helium", "helm", "helmet", "helmets", "help", "helped", "helper",
    "helpful", "helping", "helpless", "helps", "hem", "hemmed", "hems", "hen",
    "hence", "henhouse", "hens", "herald", "heralded", "heralds", "herb", "herbal",
    "herbs", "herd", "herded", "herding", "herds", "here", "hereby", "heritage",
    "hermit", "hermits", "hero", "heroes", "heroic", "heroine", "heron", "herons",
    "herring", "hesitate", "hesitated", "hew", "hewn", "hexagon", "heyday", "hibernate",
    "hiccup", "hiccups", "hickory", "hid", "hidden", "hide", "hideous", "hideout",
    "hides", "hiding", "high", "higher", "highest", "highland", "highlight", "highly",
    "highway", "hijack", "hijacked", "hike", "hiked", "hiker", "hikes", "hiking",
    "hill", "hills", "hillside", "hilltop", "hilly", "hilt", "hind", "hinder",
    "hindered", "hinders", "hinge", "hinged", "hinges", "hint", "hinted", "hinting",
    "hints", "hip", "hippo", "hippos", "hips", "hire", "hired", "hires",
    "hiring", "his", "hiss", "hissed", "hisses", "hissing", "historian", "historic",
    "history", "hit", "hitch", "hitched", "hitches", "hitching", "hits", "hitter",
    "hitting", "hive", "hives", "hoard", "hoarded", "hoarding", "hoards", "hoarse",
    "hoax", "hoaxes", "hobbies", "hobble", "hobbled", "hobbles", "hobbling", "hobby",
    "hobbyist", "hockey", "hoe", "hoed", "hoes", "hog", "hogged", "hogs",
    "hoist", "hoisted", "hoisting", "hoists", "hold", "holder", "holding", "holds",
    "hole", "holes", "hollow", "hollowed", "hollows", "holly", "holster", "home",
    "homeland", "homeless", "homely", "homemade", "homes", "homesick", "hometown", "homework",
    "honest", "honestly", "honesty", "honey", "honeybee", "honeydew", "honk", "honked",
    "honking", "honks", "honor", "honored", "honoring", "honors", "hood", "hooded",
    "hoods", "hoof", "hook", "hooked", "hooking", "hooks", "hoop", "hoops",
    "hoot", "hooted", "hooting", "hoots", "hooves", "hop", "hope", "hoped",
    "hopeful", "hopeless", "hopes", "hoping", "hopped", "hopping", "hops", "horde",
    "hordes", "horizon", "horizons", "horn", "horned", "hornet", "horns", "horrible",
    "horrid", "horrified", "horrify", "horror", "horse", "horseback", "horses", "horseshoe",
    "hose", "hosed", "hoses", "hospital", "host", "hostage", "hostages", "hosted",
    "hostel", "hostile", "hosting", "hosts", "hot", "hotel", "hotels", "hotly",
    "hotter", "hottest", "hound", "hounded", "hounds", "hour", "hourglass", "hourly",
    "hours", "house", "housed", "houses", "housing", "hover", "hovered", "hovering",
    "hovers", "how", "however", "howl", "howled", "howling", "howls", "hub",
    "hubcap", "hubs", "huddle", "huddled", "huddles", "huddling", "hue", "hues",
    "huff", "huffed", "hug", "huge", "hugely", "hugged", "hugging", "hugs",
    "hull", "hulls", "hum", "human", "humane", "humanity", "humans", "humble",
    "humbled", "humbly", "humid", "humidity", "humility", "hummed", "humming", "humor",
    "humorous", "hump", "humps", "hums", "hunch", "hunched", "hunches", "hundred",
    "hundreds", "hung", "hunger", "hungrily", "hungry", "hunk", "hunks", "hunt",
    "hunted", "hunter", "hunting", "hunts", "hurdle", "hurdled", "hurdles", "hurl",
    "hurled", "hurling", "hurls", "hurried", "hurries", "hurry", "hurt", "hurtful",
    "hurting", "hurtle", "hurtled", "hurts", "husband", "husbands", "hush", "hushed",
    "hushes", "husk", "husks", "husky", "hustle", "hustled", "hustles", "hustling",
    "hut", "hutch", "huts", "hybrid", "hybrids", "hydrant", "hydrogen", "hygiene",
    "hymn", "hymns", "hyphen", "hyphens", "ice", "iceberg", "iced", "ices",
    "icicle", "icing", "icon", "iconic", "icons", "icy", "idea", "ideal",
    "ideally", "ideals", "ideas", "identical", "identify", "identity", "idiom", "idioms",
    "idle", "idled", "idles", "idling", "idly", "idol", "idolize", "idols",
    "igloo", "igloos", "ignite", "ignited", "ignites", "igniting", "ignition", "ignore",
    "ignored", "ignores", "ignoring", "ill", "illegal", "illicit", "illness", "ills",
    "illusion", "illusions", "image", "imagery", "images", "imagine", "imagined", "imagines",
    "imagining", "imitate", "imitated", "imitates", "imitation", "immense", "immensely", "immerse",
    "immersed", "immune", "immunity", "imp", "impact", "impacted", "impacts", "impair",
    "impaired", "impairs", "impart", "imparted", "imparts", "impasse", "impatient", "impeach",
    "impede", "impeded", "impedes", "impel", "impelled", "impend", "impending", "imperial",
    "impish", "implant", "implanted", "implants", "implement", "implicate", "implied", "implies",
    "implore", "implored", "implores", "imply", "implying", "impolite", "import", "imported",
    "importing", "imports", "impose", "imposed", "imposes", "imposing", "imposter", "impress",
    "impressed", "impresses", "imprint", "imprinted", "imprints", "imprison", "improper", "improve",
    "improved", "improves", "improving", "improvise", "imps", "impulse", "impulses", "impulsive",
    "inch", "inched", "inches", "inching", "incident", "incidents", "incite", "incited",
    "incites", "incline", "inclined", "inclines", "include", "included", "includes", "including",
    "income", "incomes", "incoming", "increase", "increased", "incur", "incurred", "incurs",
    "indeed", "indent", "indented", "indents", "index", "indexed", "indexes", "indexing",
    "indicate", "indicated", "indicates", "indict", "indicted", "indigo", "indirect", "indoor",
    "indoors", "induce", "induced", "induces", "inducing", "indulge", "indulged", "indulges",
    "industry", "inept", "inert", "inertia", "infancy", "infant", "infants", "infect",
    "infected", "infection", "infects", "infer", "inferior", "inferred", "infers", "infest",
    "infested", "infinite", "infinity", "inflame", "inflamed", "inflate", "inflated", "inflates",
    "inflating", "inflict", "inflicted", "inflicts", "influence", "inform", "informal", "informed",
    "informing", "informs", "infuse", "infused", "ingenious", "ingot", "ingots", "ingrained",
    "inhabit", "inhabited", "inhabits", "inhale", "inhaled", "inhales", "inhaling", "inherent",
    "inherit", "inherited", "inherits", "inhibit", "inhibited", "inhibits", "initial", "initially",
    "initials", "initiate", "initiated", "inject", "injected", "injection", "injects", "injure",
    "injured", "injures", "injury", "ink", "inked", "inks", "inky", "inlaid",
    "inland", "inlay", "inlet", "inlets", "inmate", "inmates", "inn", "innate",
    "inner", "innkeeper", "innocence", "innocent", "innovate", "inns", "input", "inputs",
    "inquire", "inquired", "inquires", "inquiry", "insane", "inscribe", "inscribed", "insect",
    "insects", "insert", "inserted", "inserting", "inserts", "inside", "insider", "insides",
    "insight", "insights", "insist", "insisted", "insisting", "insists", "inspect", "inspected",
    "inspector", "inspects", "inspire", "inspired", "inspires", "inspiring", "install", "installed",
    "installs", "instance", "instances", "instant", "instantly", "instead", "instill", "instilled",
    "instinct", "instincts", "institute", "instruct", "instructs", "insulate", "insulated", "insult",
    "insulted", "insulting", "insults", "insure", "insured", "insures", "intact", "intake",
    "integer", "integers", "integral", "integrate", "integrity", "intend", "intended", "intending",
    "intends", "intense", "intensely", "intensify", "intensity", "intent", "inter", "interact",
    "interacts", "intercept", "interest", "interests", "interfere", "interior", "intern", "internal",
    "interns", "interpret", "interrupt", "intersect", "interval", "intervals", "intervene", "interview",
    "intimate", "into", "intricate", "intrigue", "intrigued", "intrigues", "intro", "introduce",
    "intros", "intrude", "intruded", "intruder", "intrudes", "intuition", "intuitive", "invade",
    "invaded", "invader", "invades", "invading", "invalid", "invent", "invented", "inventing",
    "inventor", "inventory", "invents", "invert", "inverted", "inverts", "invest", "invested",
    "investing", "investor", "invests", "invite", "invited", "invites", "inviting", "invoice",
    "invoiced", "invoices", "invoke", "invoked", "invokes", "invoking", "involve", "involved",
    "involves", "involving", "inward", "inwardly", "iron", "ironed", "ironic", "ironing",
    "irons", "irony", "island", "islander", "islands", "isle", "isles", "isolate",
    "isolated", "isolates", "issue", "issued", "issues", "issuing", "itch", "itched",
    "itches", "itching", "itchy", "item", "itemize", "items", "itinerary", "ivory",
    "ivy", "jab", "jabbed", "jabbing", "jabs", "jacket", "jackets", "jackpot",
    "jade", "jaded", "jagged", "jaguar", "jaguars", "jail", "jailed", "jailer",
    "jails", "jam", "jammed", "jamming", "jams", "jangle", "jangled", "janitor",
    "janitors", "jar", "jargon", "jarred", "jarring", "jars", "jasmine", "jaunt",
    "jaunts", "jaw", "jaws", "jay", "jays", "jaywalk", "jazz", "jazzy",
    "jealous", "jealousy", "jeans", "jeep", "jeeps", "jeer", "jeered", "jeering",
    "jeers", "jellies", "jelly", "jeopardy", "jerk", "jerked", "jerking", "jerks",
    "jerky", "jersey", "jerseys", "jest", "jester", "jests", "jet", "jets",
    "jetted", "jewel", "jeweler", "jewelry", "jewels", "jiffy", "jig", "jiggle",
    "jiggled", "jigs", "jigsaw", "jilt", "jilted", "jingle", "jingled", "jingles",
    "jinx", "jinxed", "job", "jobless", "jobs", "jockey", "jockeys", "jog",
    "jogged", "jogger", "jogging", "jogs", "join", "joined", "joining", "joins",
    "joint", "joints", "joke", "joked", "joker", "jokes", "joking", "jolly",
    "jolt", "jolted", "jolting", "jolts", "jostle", "jostled", "jot", "jots",
    "jotted", "jotting", "journal", "journals", "journey", "journeyed", "journeys", "joust",
    "jovial", "joy", "joyful", "joyous", "joyride", "joys", "jubilant", "jubilee",
    "judge", "judged", "judges", "judging", "judgment", "judicial", "judo", "jug",
    "juggle", "juggled", "juggler", "juggles", "juggling", "jugs", "juice", "juiced",
    "juices", "juicy", "jumble", "jumbled", "jumbles", "jumbo", "jump", "jumped",
    "jumper", "jumping", "jumps", "jumpy", "junction", "jungle", "jungles", "junior",
    "juniors", "juniper", "junk", "junkyard", "juries", "juror", "jury", "just",
    "justice", "justify", "justly", "jut", "jute", "juts", "jutted", "jutting",
    "juvenile", "kangaroo", "kangaroos", "karate", "kayak", "kayaking", "kayaks", "keel",
    "keeled", "keels", "keen", "keener", "keenly", "keep", "keeper", "keeping",
    "keeps", "keg", "kegs", "kelp", "kennel", "kennels", "kept", "kernel",
    "kernels", "kettle", "kettles", "key", "keyboard", "keyed", "keyhole", "keynote",
    "keys", "khaki", "kick", "kicked", "kicker", "kicking", "kickoff", "kicks",
    "kid", "kidding", "kidnap", "kidnapped", "kidnaps", "kidney", "kidneys", "kids",
    "kill", "killed", "killer", "killing", "kills", "kiln", "kilns", "kilo",
    "kilos", "kilt", "kilts", "kimono", "kin", "kind", "kinder", "kindest",
    "kindle", "kindled", "kindles", "kindling", "kindly", "kindness", "kinds", "king",
    "kingdom", "kingly", "kings", "kink", "kinked", "kinks", "kiosk", "kiosks",
    "kiss", "kissed", "kisses", "kissing", "kit", "kitchen", "kitchens", "kite",
    "kites", "kits", "kitten", "kittens", "kiwi", "kiwis", "knack", "knapsack",
    "knead", "kneaded", "kneading", "kneads", "knee", "kneecap", "kneel", "kneeling",
    "kneels", "knees", "knelt", "knew", "knight", "knighted", "knights", "knit",
    "knits", "knitted", "knitting", "knob", "knobs", "knock", "knocked", "knocker",
    "knocking", "knocks", "knoll", "knolls", "knot", "knots", "knotted", "knotty",
    "know", "knowing", "known", "knows", "knuckle", "knuckles", "koala", "koalas",
    "kudos", "label", "labeled", "labeling", "labels", "labor", "labored", "laborer",
    "laboring", "labors", "lace", "laced", "laces", "lacing", "lack", "lacked",
    "lacking", "lacks", "lacquer", "lad", "ladder", "ladders", "laden", "ladies",
    "ladle", "ladled", "ladles", "lads", "lady", "ladybug", "lag", "lagged",
    "lagging", "lagoon", "lagoons", "lags", "laid", "lain", "lair", "lairs",
    "lake", "lakes", "lakeside", "lamb", "lambs", "lame", "lamely", "lament",
    "lamented", "laments", "lamp", "lamppost", "lamps", "lampshade", "lance", "lances",
    "land", "landed", "landfill", "landing", "landlady", "landlord", "landmark", "lands",
    "landscape", "landslide", "lane", "lanes", "language", "languages", "lantern", "lanterns",
    "lap", "lapel", "lapels", "lapped", "lapping", "laps", "lapse", "lapsed",
    "lapses", "larch", "lard", "larder", "large", "largely", "larger", "largest",
    "lark", "larks", "larva", "larvae", "laser", "lasers", "lash", "lashed",
    "lashes", "lashing", "lasso", "lassoed", "last", "lasted", "lasting", "lastly",
    "lasts", "latch", "latched", "latches", "late", "lately", "latent", "later",
    "lateral", "latest", "lathe", "lather", "lathered", "latitude", "latter", "lattice",
    "laugh", "laughed", "laughing", "laughs", "laughter", "launch", "launched", "launches",
    "launching", "launder", "laundry", "laurel", "laurels", "lava", "lavender", "lavish",
    "lavishly", "law", "lawful", "lawless", "lawn", "lawnmower", "lawns", "laws",
    "lawyer", "lawyers", "lax", "laxity", "lay", "layer", "layered", "layers",
    "laying", "layout", "lays", "lazily", "laziness", "lazy", "lead", "leader",
    "leaders", "leading", "leads", "leaf", "leaflet", "leafs", "leafy", "league",
    "leagues", "leak", "leaked", "leaking", "leaks", "leaky", "lean", "leaned",
    "leaning", "leans", "leap", "leaped", "leapfrog", "leaping", "leaps", "learn",
    "learned", "learner", "learning", "learns", "lease", "leased", "leases", "leash",
    "leashed", "leashes", "leasing", "least", "leather", "leave", "leaves", "leaving",
    "lecture", "lectured", "lecturer", "lectures", "led", "ledge", "ledger", "ledgers",
    "ledges", "leech", "leeches", "leek", "leeks", "leer", "leered", "leeway",
    "left", "leg", "legacies", "legacy", "legal", "legalize", "legally", "legend",
    "legendary", "legends", "legged", "legible", "legibly", "legion", "legions", "legroom",
    "legs", "legume", "legumes", "leisure", "leisurely", "lemon", "lemonade", "lemons",
    "lend", "lender", "lending", "lends", "length", "lengthen", "lengths", "lengthy",
    "lenient", "lens", "lenses", "lent", "lentil", "lentils", "leopard", "leopards",
    "less", "lessen", "lessened", "lessens", "lesser", "lesson", "lessons", "lest",
    "let", "lets", "letter", "lettered", "letters", "letting", "lettuce", "levee",
    "levees", "level", "leveled", "leveling", "levels", "lever", "leverage", "levers",
    "levied", "levies", "levy", "liability", "liable", "liaison", "liar", "liars",
    "liberal", "liberally", "liberate", "liberated", "liberty", "librarian", "libraries", "library",
    "license", "licensed", "licenses", "lick", "licked", "licking", "licks", "lid",
    "lids", "lie", "lied", "lies", "lieu", "life", "lifeboat", "lifeguard",
    "lifelike", "lifelong", "lifestyle", "lifetime", "lift", "lifted", "lifting", "lifts",
    "light", "lighted", "lighten", "lighter", "lightest", "lighting", "lightly", "lightning",
    "lights", "like", "liked", "likely", "liken", "likeness", "likes", "likewise",
    "liking", "lilac", "lilacs", "lilies", "lily", "limb", "limber", "limbs",
    "lime", "limes", "limestone", "limit", "limited", "limiting", "limitless", "limits",
    "limp", "limped", "limping", "limps", "line", "linear", "lined", "linen",
    "linens", "liner", "lines", "linger", "lingered", "lingering", "lingers", "lining",
    "link", "linkage", "linked", "linking", "links", "lint", "lion", "lioness",
    "lions", "lip", "lips", "lipstick", "liquid", "liquids", "list", "listed",
    "listen", "listened", "listener", "listening", "listens", "listing", "lists", "lit",
    "literal", "literally", "literary", "literate", "litter", "littered", "litters", "little",
    "littler", "littlest", "livable", "live", "lived", "lively", "liver", "livers",
    "lives", "livestock", "livid", "living", "lizard", "lizards", "load", "loaded",
    "loader", "loading", "loads", "loaf", "loafed", "loafer", "loafs", "loan",
    "loaned", "loaning", "loans", "loath", "loathe", "loathed", "loathes", "lob",
    "lobbed", "lobbies", "lobby", "lobs", "lobster", "lobsters", "local", "locale",
    "locally", "locals", "locate", "located", "locates", "locating", "location", "lock",
    "locked", "locker", "locket", "lockets", "locking", "locks", "locust", "locusts",
    "lodge", "lodged", "lodges", "lodging", "loft", "lofts", "lofty", "log",
    "logged", "logger", "logging", "logic", "logical", "logs", "loiter", "loitered",
    "loiters", "lone", "lonely", "loner", "lonesome", "long", "longed", "longer",
    "longest", "longing", "longitude", "longs", "look", "looked", "looking", "lookout",
    "looks", "loom", "loomed", "looming", "looms", "loop", "looped", "looping",
    "loops", "loose", "loosely", "loosen", "loosened", "loosens", "loot", "looted",
    "looting", "loots", "lop", "lopsided", "lord", "lordly", "lords", "lore",
    "lose", "loser", "loses", "losing", "loss", "losses", "lost", "lot",
    "lotion", "lots", "lottery", "loud", "louder", "loudest", "loudly", "lounge",
    "lounged", "lounges", "lounging", "louse", "lousy", "lovable", "love", "loved",
    "lovely", "lover", "lovers", "loves", "loving", "low", "lower", "lowered",
    "lowering", "lowers", "lowest", "lowland", "lowly", "lows", "loyal", "loyally",
    "loyalty", "lucid", "luck", "luckily", "lucky", "lucrative", "ludicrous", "lug",
    "luggage", "lugged", "lugs", "lukewarm", "lull", "lullaby", "lulled", "lulls",
    "lumber", "lumbered", "luminous", "lump", "lumped", "lumps", "lumpy", "lunar",
    "lunch", "lunchbox", "lunched", "lunches", "lung", "lunge", "lunged", "lunges",
    "lunging", "lungs", "lurch", "lurched", "lurches", "lure", "lured", "lures",
    "lurid", "luring", "lurk", "lurked", "lurking", "lurks", "luscious", "lush",
    "luster", "lustrous", "lute", "lutes", "luxuries", "luxury", "lying", "lyric",
    "lyrical", "lyrics", "macaroni", "machine", "machinery", "machines", "mad", "madden",
    "made", "madly", "madness", "magazine", "magazines", "magic", "magical", "magician",
    "magma", "magnet", "magnetic", "magnets", "magnified", "magnify", "magnitude", "magnolia",
    "mahogany", "maid", "maiden", "maidens", "maids", "mail", "mailbox", "mailed",
    "mailing", "mailman", "mails", "maim", "maimed", "main", "mainland", "mainly",
    "mains", "mainstay", "maintain", "maintains", "maize", "majestic", "majesty", "major",
    "majority", "majors", "make", "maker", "makers", "makes", "makeshift", "makeup",
    "making", "malady", "malice", "malicious", "mall", "mallet", "mallets", "malls",
    "malt", "mammal", "mammals", "mammoth", "man", "manage", "managed", "manager",
    "managers", "manages", "managing", "mandate", "mandated", "mandates", "mane", "manes",
    "maneuver", "maneuvers", "mangle", "mangled", "mango", "mangos", "manhood", "mankind",
    "manly", "manmade", "manner", "mannered", "manners", "manor", "manors", "mansion",
    "mansions", "mantel", "mantle", "manual", "manually", "manuals", "manure", "many",
    "map", "maple", "maples", "mapped", "mapping", "maps", "mar", "marathon",
    "marathons", "marble", "marbled", "marbles", "march", "marched", "marches", "marching",
    "mare", "mares", "margin", "marginal", "margins", "marigold", "marina", "marinas",
    "marinate", "marine", "mariner", "mark", "marked", "marker", "markers", "market",
    "marketed", "marketing", "markets", "marking", "marks", "maroon", "marooned", "marred",
    "marriage", "married", "marries", "marrow", "marry", "mars", "marsh", "marshal",
    "marshals", "marshes", "marshy", "marvel", "marveled", "marvelous", "marvels", "mascot",
    "mascots", "mash", "mashed", "mashes", "mashing", "mask", "masked", "masking",
    "masks", "mason", "masonry", "mass", "massage", "massaged", "massages", "masses",
    "massive", "mast", "master", "mastered", "masters", "mastery", "masts", "mat",
    "match", "matched", "matches", "matching", "mate", "mated", "material", "materials",
    "maternal", "mates", "math", "matinee", "mating", "matriarch", "matrix", "matron",
    "mats", "matted", "matter", "mattered", "matters", "mattress", "mature", "matured",
    "matures", "maturity", "maul", "mauled", "mauls", "mauve", "maverick", "maxim",
    "maximize", "maximum", "may", "maybe", "mayhem", "mayor", "mayors", "maze",
    "mazes", "meadow", "meadows", "meager", "meal", "meals", "mealtime", "mean",
    "meander", "meandered", "meanders", "meaning", "means", "meant", "meantime", "meanwhile",
    "measure", "measured", "measures", "measuring", "meat", "meatball", "meats", "meaty",
    "mechanic", "mechanism", "medal", "medallion", "medals", "meddle", "meddled", "meddles",
    "meddling", "media", "median", "mediate", "mediated", "mediator", "medic", "medical",
    "medicine", "medics", "medieval", "meditate", "meditated", "medium", "medley", "meek",
    "meekly", "meet", "meeting", "meets", "mellow", "mellowed", "melodic", "melodies",
    "melody", "melon", "melons", "melt", "melted", "melting", "melts", "member",
    "members", "membrane", "memento", "mementos", "memo", "memoir", "memoirs", "memorial",
    "memories", "memorize", "memory", "memos", "men", "menace", "menaced", "menaces",
    "menacing", "mend", "mended", "mending", "mends", "mental", "mentally", "mention",
    "mentioned", "mentions", "mentor", "mentored", "mentors", "menu", "menus", "merchant",
    "merchants", "merciful", "merciless", "mercury", "mercy", "mere", "merely", "merge",
    "merged", "merger", "merges", "merging", "merit", "merited", "merits", "mermaid",
    "mermaids", "merrily", "merriment", "merry", "mesh", "meshed", "meshes", "mess",
    "message", "messages", "messed", "messenger", "messes", "messing", "messy", "met",
    "metal", "metallic", "metals", "metaphor", "metaphors", "meteor", "meteors", "meter",
    "metered", "meters", "method", "methods", "metric", "metro", "mice", "microbe",
    "microbes", "microchip", "microwave", "mid", "midair", "midday", "middle", "midnight",
    "midst", "midway", "might", "mighty", "migrant", "migrate", "migrated", "migration",
    "mild", "milder", "mildest", "mildew", "mildly", "mile", "mileage", "miles",
    "milestone", "military", "militia", "milk", "milked", "milking", "milks", "milky",
    "mill", "milled", "miller", "milling", "million", "millions", "mills", "mime",
    "mimed", "mimes", "mimic", "mimicked", "mimics", "mince", "minced", "minces",
    "mincing", "mind", "minded", "mindful", "minding", "mindless", "minds", "mine",
    "mined", "miner", "mineral", "minerals", "miners", "mines", "mingle", "mingled",
    "mingles", "mingling", "minimal", "minimize", "minimum", "mining", "minion", "minions",
    "minister", "ministry", "mink", "minnow", "minnows", "minor", "minority", "minors",
    "mint", "minted", "mints", "minty", "minus", "minute", "minutes", "miracle",
    "miracles", "mirage", "mirages", "mire", "mired", "mirror", "mirrored", "mirrors",
    "mirth", "mischief", "miser", "miserable", "miserly", "misers", "misery", "misfit",
    "misfits", "mishap", "mishaps", "mislead", "misleads", "misled", "misplace", "misplaced",
    "miss", "missed", "misses", "missing", "mission", "missions", "mist", "mistake",
    "mistaken", "mistakes", "mister", "mistook", "mistrust", "mists", "misty", "mitt",
    "mitten", "mittens", "mitts", "mix", "mixed", "mixer", "mixes", "mixing",
    "mixture", "moan", "moaned", "moaning", "moans", "moat", "moats", "mob",
    "mobbed", "mobile", "mobility", "mobs", "moccasin", "mock", "mocked", "mockery",
    "mocking", "mocks", "mode", "model", "modeled", "models", "moderate", "moderated",
    "modern", "modernize", "modes", "modest", "modestly", "modesty", "modified", "modifies",
    "modify", "modular", "module", "modules", "moist", "moisten", "moisture", "molar",
    "molars", "mold", "molded", "molding", "molds", "moldy", "mole", "molecule",
    "molecules", "moles", "mollusk", "molten", "moment", "moments", "momentum", "monarch",
    "monarchs", "monarchy", "monastery", "monetary", "money", "mongoose", "monitor", "monitored",
    "monitors", "monk", "monkey", "monkeys", "monks", "monogram", "monologue", "monopoly",
    "monotone", "monsoon", "monster", "monsters", "month", "monthly", "months", "monument",
    "monuments", "mood", "moods", "moody", "moon", "moonbeam", "moonlight", "moons",
    "moor", "moored", "mooring", "moors", "moose", "mop", "mope", "moped",
    "mopes", "moping", "mopped", "mopping", "mops", "moral", "morale", "morals",
    "morbid", "more", "moreover", "morning", "mornings", "morsel", "morsels", "mortal",
    "mortality", "mortals", "mortar", "mortgage", "mortgages", "mosaic", "mosaics", "mosque",
    "mosques", "mosquito", "moss", "mosses", "mossy", "most", "mostly", "motel",
    "motels", "moth", "mothball", "mother", "mothered", "motherly", "mothers", "moths",
    "motion", "motioned", "motions", "motivate", "motive", "motives", "motor", "motorist",
    "motors", "motto", "mottos", "mound", "mounded", "mounds", "mount", "mountain",
    "mountains", "mounted", "mounting", "mounts", "mourn", "mourned", "mourning", "mourns",
    "mouse", "mousetrap", "mouth", "mouthful", "mouths", "move", "moved", "movement",
    "mover", "moves", "movie", "movies", "moving", "mow", "mowed", "mower",
    "mowing", "mows", "much", "muck", "mud", "muddle", "muddled", "muddles",
    "muddy", "muffin", "muffins", "muffle", "muffled", "muffler", "muffles", "mug",
    "mugged", "mugs", "mulch", "mule", "mules", "mull", "mulled", "mulling",
    "mulls", "multiple", "multiply", "multitude", "mumble", "mumbled", "mumbles", "mumbling",
    "mummies", "mummy", "munch", "munched", "munches", "munching", "mundane", "mural",
    "murals", "murky", "murmur", "murmured", "murmurs", "muscle", "muscles", "muscular",
    "muse", "mused", "muses", "museum", "museums", "mush", "mushroom", "mushrooms",
    "mushy", "music", "musical", "musician", "musing", "musket", "must", "mustard",
    "muster", "mustered", "musty", "mutate", "mutated", "mutation", "mute", "muted",
    "mutely", "mutiny", "mutter", "muttered", "muttering", "mutters", "mutton", "mutual",
    "mutually", "muzzle", "muzzled", "muzzles", "myriad", "mysteries", "mystery", "mystify",
    "myth", "mythical", "myths", "nab", "nabbed", "nabs", "nag", "nagged",
    "nagging", "nags", "nail", "nailed", "nailing", "nails", "naive", "name",
    "named", "nameless", "namely", "names", "naming", "nannies", "nanny", "nap",
    "napkin", "napkins", "napped", "napping", "naps", "narrate", "narrated", "narrator",
    "narrow", "narrowed", "narrowly", "narrows", "nasal", "nastily", "nasty", "nation",
    "national", "nations", "native", "natives", "natural", "naturally", "nature", "naughty",
    "nausea", "naval", "navies", "navigate", "navigated", "navigator", "navy", "near",
    "nearby", "neared", "nearest", "nearing", "nearly", "nears", "neat", "neater",
    "neatest", "neatly", "nebula", "necessary", "necessity", "neck", "necklace", "necks",
    "necktie", "nectar", "need", "needed", "needing", "needle", "needles", "needless",
    "needs", "needy", "negate", "negated", "negative", "neglect", "neglected", "neglects",
    "negotiate", "neigh", "neighbor", "neighbors", "neighed", "neither", "neon", "nephew",
    "nephews", "nerve", "nerves", "nervous", "nest", "nested", "nesting", "nestle",
    "nestled", "nestles", "nestling", "nests", "net", "nets", "netted", "netting",
    "network", "neutral", "never", "new", "newborn", "newcomer", "newer", "newest",
    "newly", "news", "newscast", "newspaper", "next", "nibble", "nibbled", "nibbles",
    "nibbling", "nice", "nicely", "nicer", "nicest", "niche", "niches", "nick",
    "nicked", "nickel", "nickname", "nicks", "niece", "nieces", "night", "nightfall",
    "nightly", "nightmare", "nights", "nimble", "nimbly", "nine", "nineteen", "ninety",
    "ninth", "nip", "nipped", "nipping", "nips", "nobility", "noble", "nobles",
    "nobly", "nobody", "nocturnal", "nod", "nodded", "nodding", "node", "nodes",
    "nods", "noise", "noises", "noisily", "noisy", "nomad", "nomadic", "nomads",
    "nominal", "nominate", "nominated", "nominee", "none", "nonsense", "nonstop", "noodle",
    "noodles", "nook", "nooks", "noon", "noontime", "noose", "nor", "norm",
    "normal", "normally", "norms", "north", "northeast", "northern", "northwest", "nose",
    "nosed", "noses", "nostril", "nostrils", "nosy", "not", "notable", "notably",
    "notary", "notch", "notched", "notches", "note", "notebook", "noted", "notes",
    "nothing", "notice", "noticed", "notices", "noticing", "notified", "notifies", "notify",
    "noting", "notion", "notions", "notorious", "noun", "nouns", "nourish", "nourished",
    "novel", "novelist", "novels", "novelty", "novice", "novices", "now", "nowadays",
    "nowhere", "nozzle", "nozzles", "nuance", "nuances", "nuclear", "nucleus", "nudge",
    "nudged", "nudges", "nudging", "nugget", "nuggets", "nuisance", "null", "nullify",
    "numb", "numbed", "number", "numbered", "numbers", "numbly", "numbs", "numeral",
    "numeric", "numerous", "nun", "nuns", "nurse", "nursed", "nursery", "nurses",
    "nursing", "nurture", "nurtured", "nurtures", "nut", "nutmeg", "nutrient", "nutrients",
    "nutrition", "nuts", "nutshell", "nutty", "nuzzle", "nuzzled", "nylon", "oak",
    "oaks", "oar", "oars", "oasis", "oat", "oath", "oaths", "oatmeal",
    "oats", "obey", "obeyed", "obeying", "obeys", "object", "objected", "objection",
    "objects", "oblige", "obliged", "obliges", "obliging", "oblivion", "oblivious", "oblong",
    "oboe", "oboes", "obscure", "obscured", "obscurity", "observe", "observed", "observer",
    "observes", "obsolete", "obstacle", "obstacles", "obstruct", "obstructs", "obtain", "obtained",
    "obtaining", "obtains", "obvious", "obviously", "occasion", "occasions", "occupant", "occupied",
    "occupies", "occupy", "occur", "occurred", "occurring", "occurs", "ocean", "oceanic",
    "oceans", "octagon", "octave", "octaves", "octopus", "odd", "oddity", "oddly",
    "odds", "ode", "odes", "odor", "odors", "off", "offbeat", "offend",
    "offended", "offender", "offends", "offense", "offensive", "offer", "offered", "offering",
    "offers", "offhand", "office", "officer", "offices", "official", "offshore", "offspring",
    "often", "ogre", "ogres", "oil", "oiled", "oiling", "oils", "oily",
    "ointment", "old", "olden", "older", "oldest", "olive", "olives", "omelet",
    "omelets", "omen", "omens", "ominous", "omit", "omits", "omitted", "omitting",
    "once", "oncoming", "one", "ones", "oneself", "ongoing", "onion", "onions",
    "onlooker", "only", "onset", "onto", "onward", "ooze", "oozed", "oozes",
    "oozing", "opal", "opals", "opaque", "open", "opened", "opening", "openly",
    "opens", "opera", "operas", "operate", "operated", "operates", "operator", "opinion",
    "opinions", "opponent", "opponents", "oppose", "opposed", "opposes", "opposing", "opposite",
    "oppress", "oppressed", "opt", "opted", "optic", "optical", "optimal", "optimism",
    "optimist", "opting", "option", "optional", "options", "opts", "oral", "orally",
    "orange", "oranges", "orator", "orbit", "orbited", "orbiting", "orbits", "orchard",
    "orchards", "orchestra", "orchid", "orchids", "ordeal", "ordeals", "order", "ordered",
    "ordering", "orderly", "orders", "ordinary", "ore", "ores", "organ", "organic",
    "organism", "organize", "organized", "organs", "orient", "oriented", "origin", "original",
    "origins", "ornament", "ornaments", "ornate", "orphan", "orphaned", "orphans", "ostrich",
    "other", "others", "otherwise", "otter", "otters", "ought", "ounce", "ounces",
    "our", "ours", "ourselves", "oust", "ousted", "out", "outback", "outbreak",
    "outburst", "outcast", "outcome", "outcry", "outdo", "outdoor", "outdoors", "outer",
    "outermost", "outfit", "outfits", "outfitted", "outgoing", "outgrow", "outgrown", "outing",
    "outings", "outlast", "outlasted", "outlaw", "outlawed", "outlaws", "outlet", "outlets",
    "outline", "outlined", "outlines", "outlive", "outlived", "outlook", "outnumber", "output",
    "outputs", "outrage", "outraged", "outright", "outrun", "outruns", "outset", "outside",
    "outsider", "outskirts", "outsmart", "outward", "outweigh", "oval", "ovals", "ovation",
    "oven", "ovens", "over", "overall", "overboard", "overcame", "overcast", "overcome",
    "overdo", "overdone", "overdue", "overflow", "overflows", "overgrown", "overhaul", "overhead",
    "overhear", "overheard", "overjoyed", "overlap", "overlaps", "overload", "overlook", "overlooks",
    "overly", "overnight", "overpower", "override", "overrides", "overrun", "oversaw", "oversee",
    "oversees", "oversight", "overt", "overtake", "overtaken", "overthrow", "overtime", "overtly",
    "overtook", "overture", "overturn", "overview", "overwhelm", "owe", "owed", "owes",
    "owing", "owl", "owls", "own", "owned", "owner", "owners", "owning",
    "owns", "oxen", "oxide", "oxidize", "oxygen", "oyster", "oysters", "ozone",
    "pace", "paced", "paces", "pacific", "pacify", "pacing", "pack", "package",
    "packages", "packed", "packer", "packet", "packets", "packing", "packs", "pact",
    "pacts", "pad", "padded", "padding", "paddle", "paddled", "paddles", "paddling",
    "paddock", "padlock", "padlocks", "pads", "pagan", "page", "pageant", "pageants",
    "paged", "pages", "paging", "pagoda", "paid", "pail", "pails", "pain",
    "pained", "painful", "painless", "pains", "paint", "painted", "painter", "painting",
    "paints", "pair", "paired", "pairing", "pairs", "pajamas", "pal", "palace",
    "palaces", "palate", "pale", "paler", "palest", "palette", "palm", "palmed",
    "palms", "pals", "paltry", "pamper", "pampered", "pampers", "pamphlet", "pamphlets",
    "pan", "pancake", "pancakes", "panda", "pandas", "pane", "panel", "paneled",
    "panels", "panes", "pang", "pangs", "panic", "panicked", "panics", "panned",
    "panorama", "pans", "pansies", "pansy", "pant", "panted", "panther", "panthers",
    "panting", "pantries", "pantry", "pants", "paper", "papered", "papers", "paperwork",
    "papyrus", "par", "parable", "parables", "parachute", "parade", "paraded", "parades",
    "parading", "paradise", "paradox", "paragraph", "parakeet", "parallel", "paralyze", "paralyzed",
    "paramount", "parasite", "parasites", "parasol", "parcel", "parcels", "parch", "parched",
    "parchment", "pardon", "pardoned", "pardons", "pare", "pared", "parent", "parental",
    "parents", "paring", "parish", "park", "parked", "parking", "parks", "parkway",
    "parley", "parlor", "parlors", "parody", "parole", "paroled", "parrot", "parrots",
    "parsley", "parsnip", "part", "partake", "parted", "partial", "partially", "particle",
    "particles", "parties", "parting", "partition", "partly", "partner", "partnered", "partners",
    "partridge", "parts", "party", "pass", "passage", "passages", "passed", "passenger",
    "passes", "passing", "passion", "passions", "passive", "passively", "passport", "passports",
    "password", "passwords", "past", "pasta", "paste", "pasted", "pastel", "pastels",
    "pastes", "pastime", "pastimes", "pasting", "pastor", "pastors", "pastries", "pastry",
    "pasture", "pastures", "pat", "patch", "patched", "patches", "patching", "patchwork",
    "patent", "patented", "patents", "path", "paths", "pathway", "patience", "patient",
    "patients", "patio", "patios", "patriot", "patriotic", "patriots", "patrol", "patrolled",
    "patrols", "patron", "patrons", "pats", "patted", "patter", "pattered", "pattern",
    "patterned", "patterns", "patties", "patting", "patty", "pause", "paused", "pauses",
    "pausing", "pave", "paved", "pavement", "paves", "pavilion", "paving", "paw",
    "pawed", "pawing", "pawn", "pawned", "pawns", "paws", "pay", "payer",
    "paying", "payment", "payments", "payroll", "pays", "pea", "peace", "peaceful",
    "peach", "peaches", "peacock", "peacocks", "peak", "peaked", "peaks", "peal",
    "pealed", "peals", "peanut", "peanuts", "pear", "pearl", "pearls", "pears",
    "peas", "peasant", "peasants", "peat", "pebble", "pebbles", "pebbly", "pecan",
    "pecans", "peck", "pecked", "pecking", "pecks", "peculiar", "pedal", "pedaled",
    "pedals", "peddle", "peddled", "peddler", "peddles", "pedestal", "peek", "peeked",
    "peeking", "peeks", "peel", "peeled", "peeling", "peels", "peep", "peeped",
    "peeping", "peeps", "peer", "peered", "peering", "peers", "peg", "pegged",
    "pegs", "pelican", "pelicans", "pellet", "pellets", "pelt", "pelted", "pelts",
    "pen", "penalize", "penalties", "penalty", "pencil", "penciled", "pencils", "pendant",
    "pendants", "pending", "pendulum", "penetrate", "penguin", "penguins", "peninsula", "penned",
    "pennies", "penny", "pens", "pension", "pensions", "pensive", "peony", "people",
    "peopled", "pepper", "peppered", "peppers", "per", "perceive", "perceived", "perceives",
    "percent", "percents", "perch", "perched", "perches", "perching", "perennial", "perfect",
    "perfectly", "perform", "performed", "performer", "performs", "perfume", "perfumed", "perfumes",
    "perhaps", "peril", "perilous", "perils", "perimeter", "period", "periodic", "periods",
    "perish", "perished", "perishes", "perk", "perked", "perks", "perky", "permanent",
    "permeate", "permit", "permits", "permitted", "perpetual", "perplex", "perplexed", "persist",
    "persisted", "persists", "person", "personal", "personnel", "persons", "persuade", "persuaded",
    "persuades", "pertain", "pertained", "pertains", "pest", "pester", "pestered", "pests",
    "pet", "petal", "petals", "petite", "petition", "petitions", "petrified", "petrify",
    "pets", "petted", "petting", "petty", "pew", "pews", "phantom", "phantoms",
    "phase", "phased", "phases", "phone", "phoned", "phones", "phoning", "photo",
    "photos", "phrase", "phrased", "phrases", "phrasing", "physical", "physics", "physique",
    "pianist", "piano", "pianos", "pick", "pickax", "picked", "picker", "picking",
    "pickle", "pickles", "picks", "pickup", "picnic", "picnics", "picture", "pictured",
    "pictures", "pie", "piece", "pieced", "pieces", "pier", "pierce", "pierced",
    "pierces", "piercing", "piers", "pies", "pig", "pigeon", "pigeons", "piglet",
    "pigment", "pigments", "pigpen", "pigs", "pigtail", "pike", "pikes", "pile",
    "piled", "piles", "pilfer", "pilfered", "pilgrim", "pilgrims", "piling", "pill",
    "pillar", "pillars", "pillow", "pillows", "pills", "pilot", "piloted", "pilots",
    "pin", "pinch", "pinched", "pinches", "pinching", "pine", "pineapple", "pinecone",
    "pined", "pines", "pining", "pink", "pinkish", "pinks", "pinnacle", "pinned",
    "pinning", "pinpoint", "pins", "pint", "pints", "pioneer", "pioneers", "pious",
    "pipe", "piped", "pipeline", "pipes", "piping", "piracy", "pirate", "pirates",
    "pistol", "pistols", "piston", "pistons", "pit", "pitch", "pitched", "pitcher",
    "pitches", "pitching", "pitfall", "pith", "pithy", "pitied", "pities", "pitiful",
    "pits", "pitted", "pity", "pivot", "pivotal", "pivoted", "pivots", "pixel",
    "pixels", "pizza", "pizzas", "placard", "place", "placed", "places", "placid",
    "placing", "plague", "plagued", "plagues", "plaid", "plain", "plainly", "plains",
    "plan", "plane", "planes", "planet", "planets", "plank", "planks", "planned",
    "planner", "planning", "plans", "plant", "planted", "planter", "planting", "plants",
    "plaque", "plaster", "plastered", "plastic", "plastics", "plate", "plateau", "plated",
    "plates", "platform", "platforms", "plating", "platinum", "platoon", "platter", "platters",
    "play", "played", "player", "players", "playful", "playing", "playmate", "plays",
    "plaza", "plazas", "plea", "plead", "pleaded", "pleads", "pleas", "pleasant",
    "please", "pleased", "pleases", "pleasing", "pleasure", "pleat", "pleated", "pleats",
    "pledge", "pledged", "pledges", "plentiful", "plenty", "pliers", "plight", "plod",
    "plodded", "plodding", "plods", "plop", "plopped", "plot", "plots", "plotted",
    "plotting", "plow", "plowed", "plowing", "plows", "ploy", "ploys", "pluck",
    "plucked", "plucking", "plucks", "plug", "plugged", "plugging", "plugs", "plum",
    "plumber", "plumbing", "plume", "plumes", "plummet", "plummets", "plump", "plums",
    "plunder", "plundered", "plunge", "plunged", "plunges", "plunging", "plural", "plus",
    "plush", "pocket", "pocketed", "pockets", "pod", "podium", "pods", "poem",
    "poems", "poet", "poetic", "poetry", "poets", "point", "pointed", "pointer",
    "pointing", "pointless", "points", "poise", "poised", "poison", "poisoned", "poisons",
    "poke", "poked", "poker", "pokes", "poking", "polar", "pole", "poles",
    "police", "policed", "policies", "policy", "polish", "polished", "polishes", "polite",
    "politely", "political", "politics", "polka", "poll", "polled", "pollen", "polling",
    "polls", "pollster", "pollute", "polluted", "pollutes", "pond", "ponder", "pondered",
    "ponders", "ponds", "ponies", "pony", "ponytail", "poodle", "poodles", "pool",
    "pooled", "pooling", "pools", "poor", "poorer", "poorest", "poorly", "pop",
    "popcorn", "poplar", "popped", "poppies", "popping", "poppy", "pops", "popular",
    "populate", "populated", "porch", "porches", "pore", "pores", "pork", "porous",
    "porridge", "port", "portable", "portal", "porter", "porters", "portfolio", "portion",
    "portions", "portrait", "portraits", "portray", "portrayed", "ports", "pose", "posed",
    "poses", "posing", "position", "positions", "positive", "possess", "possessed", "possesses",
    "possible", "possibly", "post", "postage", "postcard", "posted", "poster", "posting",
    "postman", "postpone", "posts", "pot", "potato", "potatoes", "potent", "potential",
    "pothole", "potion", "potions", "pots", "potted", "potter", "pottery", "pouch",
    "pouches", "poultry", "pounce", "pounced", "pounces", "pouncing", "pound", "pounded",
    "pounding", "pounds", "pour", "poured", "pouring", "pours", "pout", "pouted",
    "pouting", "pouts", "poverty", "powder", "powdered", "powders", "powdery", "power",
    "powered", "powerful", "powers", "practical", "practice", "practiced", "practices", "prairie",
    "prairies", "praise", "praised", "praises", "praising", "prance", "pranced", "prances",
    "prancing", "prank", "pranks", "prankster", "pray", "prayed", "prayer", "praying",
    "prays", "preach", "preached", "preacher", "preaches", "precede", "preceded", "precedes",
    "precinct", "precious", "precise", "precisely", "precision", "predator", "predators", "predict",
    "predicted", "predicts", "preen", "preened", "preface", "prefer", "preferred", "prefers",
    "prefix", "prefixes", "premier", "premiere", "premise", "premises", "premium", "premiums",
    "prepare", "prepared", "prepares", "preparing", "prescribe", "present", "presented", "presently",
    "presents", "preserve", "preserved", "preserves", "preside", "presided", "presides", "press",
    "pressed", "presses", "pressing", "pressure", "pressures", "prestige", "presume", "presumed",
    "presumes", "pretend", "pretended", "pretends", "prettier", "prettiest", "pretty", "pretzel",
    "pretzels", "prevail", "prevailed", "prevails", "prevent", "prevented", "prevents", "preview",
    "previews", "previous", "prey", "preyed", "price", "priced", "priceless", "prices",
    "pricing", "prick", "pricked", "prickly", "pricks", "pride", "prided", "pried",
    "pries", "priest", "priests", "prim", "primal", "primary", "prime", "primed",
    "primer", "primitive", "primly", "prince", "princes", "princess", "principal", "principle",
    "print", "printed", "printer", "printing", "printout", "prints", "prior", "priority",
    "prism", "prisms", "prison", "prisoner", "prisons", "privacy", "private", "privately",
    "privilege", "prize", "prized", "prizes", "pro", "probable", "probably", "probe",
    "probed", "probes", "probing", "problem", "problems", "proceed", "proceeded", "proceeds",
    "process", "processed", "processes", "proclaim", "proclaims", "procure", "procured", "prod",
    "prodded", "prodding", "prods", "produce", "produced", "producer", "produces", "producing",
    "product", "products", "profess", "professed", "professor", "profile", "profiled", "profiles",
    "profit", "profited", "profits", "profound", "program", "programs", "progress", "prohibit",
    "prohibits", "project", "projected", "projects", "prolong", "prolonged", "prolongs", "prom",
    "promenade", "prominent", "promise", "promised", "promises", "promising", "promote", "promoted",
    "promotes", "prompt", "prompted", "promptly", "prompts", "prone", "prong", "pronged",
    "prongs", "pronoun", "pronounce", "proof", "proofs", "prop", "propel", "propelled",
    "propeller", "propels", "proper", "properly", "property", "prophecy", "prophet", "prophets",
    "proposal", "propose", "proposed", "proposes", "propped", "propping", "props", "prose",
    "prospect", "prospects", "prosper", "prospered", "protect", "protected", "protector", "protects",
    "protein", "proteins", "protest", "protested", "protests", "proton", "protons", "prototype",
    "proud", "prouder", "proudest", "proudly", "prove", "proved", "proven", "proverb",
    "proverbs", "proves", "provide", "provided", "provider", "provides", "providing", "province",
    "provinces", "proving", "provoke", "provoked", "provokes", "prow", "prowess", "prowl",
    "prowled", "prowler", "prowling", "prowls", "proxy", "prudence", "prudent", "prune",
    "pruned", "prunes", "pruning", "pry", "prying", "public", "publicly", "publish",
    "published", "publisher", "publishes", "pucker", "puckered", "pudding", "puddle", "puddles",
    "puff", "puffed", "puffing", "puffs", "puffy", "pull", "pulled", "pulley",
    "pulleys", "pulling", "pulls", "pulp", "pulpit", "pulse", "pulsed", "pulses",
    "pulsing", "pump", "pumped", "pumping", "pumpkin", "pumpkins", "pumps", "pun",
    "punch", "punched", "punches", "punching", "punctual", "puncture", "punctured", "pungent",
    "punish", "punished", "punishes", "puns", "punt", "punted", "punts", "puny",
    "pup", "pupil", "pupils", "puppet", "puppets", "puppies", "puppy", "pups",
    "purchase", "purchased", "purchases", "pure", "purely", "purer", "purest", "purge",
    "purged", "purges", "purity", "purple", "purplish", "purpose", "purposes", "purr",
    "purred", "purring", "purrs", "purse", "pursed", "purses", "pursue", "pursued",
    "pursues", "pursuing", "pursuit", "push", "pushed", "pushes", "pushing", "put",
    "puts", "putting", "putty", "puzzle", "puzzled", "puzzles", "puzzling", "pyramid",
    "pyramids", "python", "pythons", "quack", "quacked", "quacking", "quacks", "quad",
    "quads", "quail", "quails", "quaint", "quake", "quaked", "quakes", "quaking",
    "qualified", "qualifies", "qualify", "qualities", "quality", "qualm", "qualms", "quandary",
    "quantity", "quantum", "quarrel", "quarreled", "quarrels", "quarries", "quarry", "quart",
    "quarter", "quarterly", "quarters", "quartet", "quarts", "quartz", "quash", "quashed",
    "quaver", "quavered", "quay", "quays", "queasy", "queen", "queenly", "queens",
    "quell", "quelled", "quells", "quench", "quenched", "quenches", "queried", "queries",
    "query", "quest", "question", "questions", "quests", "queue", "queued", "queues",
    "quibble", "quibbled", "quick", "quicken", "quicker", "quickest", "quickly", "quicksand",
    "quiet", "quieter", "quietest", "quietly", "quill", "quills", "quilt", "quilted",
    "quilting", "quilts", "quince", "quip", "quipped", "quips", "quirk", "quirks",
    "quirky", "quit", "quite", "quits", "quitter", "quitting", "quiver", "quivered",
    "quivering", "quivers", "quiz", "quizzed", "quizzes", "quota", "quotas", "quote",
    "quoted", "quotes", "quotient", "quoting", "rabbit", "rabbits", "rabble", "rabid",
    "raccoon", "raccoons", "race", "raced", "racer", "races", "racetrack", "racing",
    "rack", "racked", "racket", "racks", "radar", "radiance", "radiant", "radiate",
    "radiated", "radiates", "radiation", "radiator", "radical", "radically", "radio", "radioed",
    "radios", "radish", "radishes", "radius", "raffle", "raffled", "raffles", "raft",
    "rafted", "rafter", "rafting", "rafts", "rag", "rage", "raged", "rages",
    "ragged", "raging", "rags", "raid", "raided", "raider", "raiding", "raids",
    "rail", "railing", "railroad", "rails", "railway", "rain", "rainbow", "raincoat",
    "rained", "rainfall", "raining", "rains", "rainy", "raise", "raised", "raises",
    "raisin", "raising", "raisins", "rake", "raked", "rakes", "raking", "rallied",
    "rallies", "rally", "ram", "ramble", "rambled", "rambles", "rambling", "rammed",
    "ramming", "ramp", "rampage", "rampant", "ramps", "rams", "ran", "ranch",
    "rancher", "ranches", "rancid", "random", "randomly", "rang", "range", "ranged",
    "ranger", "ranges", "ranging", "rank", "ranked", "ranking", "ranks", "ransack",
    "ransacked", "ransom", "rant", "ranted", "ranting", "rants", "rap", "rapid",
    "rapidly", "rapids", "rapped", "rapping", "rapport", "raps", "rapt", "rapture",
    "rare", "rarely", "rarer", "rarest", "rarity", "rascal", "rascals", "rash",
    "rashly", "rasp", "rasped", "rasps", "raspy", "rat", "rate", "rated",
    "rates", "rather", "ratified", "ratify", "rating", "ratio", "ration", "rats",
    "rattle", "rattled", "rattles", "rattling", "raucous", "ravage", "ravaged", "rave",
    "raved", "raven", "ravenous", "ravens", "raves", "ravine", "ravines", "raving",
    "raw", "ray", "rayon", "rays", "raze", "razed", "razor", "razors",
    "reach", "reached", "reaches", "reaching", "react", "reacted", "reacting", "reaction",
    "reactor", "reacts", "read", "reader", "readers", "readied", "readies", "readily",
    "readiness", "reading", "reads", "ready", "real", "realism", "realist", "reality",
    "realize", "realized", "realizes", "realizing", "really", "realm", "realms", "ream",
    "reams", "reap", "reaped", "reaper", "reaping", "reaps", "rear", "reared",
    "rearing", "rears", "reason", "reasoned", "reasons", "rebate", "rebates", "rebel",
    "rebelled", "rebellion", "rebels", "rebound", "rebounded", "rebounds", "rebuff", "rebuffed",
    "rebuild", "rebuilds", "rebuilt", "rebuke", "rebuked", "rebukes", "recall", "recalled",
    "recalling", "recalls", "recap", "recapped", "recaps", "recede", "receded", "recedes",
    "receding", "receipt", "receive", "received", "receiver", "receives", "receiving", "recent",
    "recently", "recess", "recesses", "recession", "recipe", "recipes", "recital", "recite",
    "recited", "recites", "reciting", "reckless", "reckon", "reckoned", "reckoning", "reckons",
    "reclaim", "reclaimed", "reclaims", "recline", "reclined", "reclines", "reclining", "recluse",
    "recognize", "recoil", "recoiled", "recoils", "recollect", "record", "recorded", "recorder",
    "recording", "records", "recount", "recounted", "recounts", "recoup", "recouped", "recover",
    "recovered", "recovers", "recovery", "recruit", "recruited", "recruits", "rectangle", "rectified",
    "rectify", "recur", "recurred", "recurring", "recurs", "recycle", "recycled", "recycles",
    "recycling", "red", "redden", "reddish", "redeem", "redeemed", "redeems", "redness",
    "redo", "redone", "reduce", "reduced", "reduces", "reducing", "reduction", "reed",
    "reeds", "reef", "reefs", "reek", "reeked", "reeks", "reel", "reeled",
    "reeling", "reels", "refer", "referee", "reference", "referred", "referring", "refers",
    "refine", "refined", "refinery", "refines", "refining", "reflect", "reflected", "reflector",
    "reflects", "reflex", "reflexes", "reform", "reformed", "reformer", "reforms", "refrain",
    "refrained", "refrains", "refresh", "refreshed", "refreshes", "refuge", "refugee", "refugees",
    "refund", "refunded", "refunds", "refusal", "refuse", "refused", "refuses", "refusing",
    "refute", "refuted", "refutes", "regain", "regained", "regains", "regal", "regally",
    "regard", "regarded", "regarding", "regards", "regime", "regiment", "regimes", "region",
    "regional", "regions", "register", "registers", "registry", "regret", "regrets", "regretted",
    "regular", "regularly", "regulate", "regulated", "rehearsal", "rehearse", "rehearsed", "reign",
    "reigned", "reigning", "reigns", "rein", "reined", "reinforce", "reins", "reject",
    "rejected", "rejecting", "rejection", "rejects", "rejoice", "rejoiced", "rejoices", "rejoicing",
    "rejoin", "rejoined", "relapse", "relapsed", "relate", "related", "relates", "relating",
    "relation", "relative", "relax", "relaxed", "relaxes", "relaxing", "relay", "relayed",
    "relays", "release", "released", "releases", "releasing", "relent", "relented", "relents",
    "relevance", "relevant", "reliable", "reliably", "reliance", "relic", "relics", "relied",
    "relief", "relies", "relieve", "relieved", "relieves", "religion", "religious", "relish",
    "relished", "relishes", "relive", "relived", "reluctant", "rely", "relying", "remain",
    "remainder", "remained", "remaining", "remains", "remark", "remarked", "remarks", "remedied",
    "remedies", "remedy", "remember", "remembers", "remind", "reminded", "reminder", "reminds",
    "reminisce", "remit", "remitted", "remnant", "remnants", "remodel", "remodeled", "remorse",
    "remote", "remotely", "removal", "remove", "removed", "removes", "removing", "rename",
    "renamed", "rend", "render", "rendered", "renders", "renew", "renewal", "renewed",
    "renews", "renounce", "renounced", "renovate", "renovated", "renown", "renowned", "rent",
    "rental", "rented", "renting", "rents", "repaid", "repair", "repaired", "repairing",
    "repairs", "repay", "repays", "repeal", "repealed", "repeat", "repeated", "repeating",
    "repeats", "repel", "repelled", "repellent", "repels", "repent", "repented", "repents",
    "replace", "replaced", "replaces", "replacing", "replay", "replayed", "replays", "replenish",
    "replica", "replicas", "replicate", "replied", "replies", "reply", "replying", "report",
    "reported", "reporter", "reporting", "reports", "repose", "represent", "repress", "repressed",
    "reprieve", "reprimand", "reprisal", "reproach", "reproduce", "reptile", "reptiles", "republic",
    "republics", "repulse", "repulsed", "reputable", "repute", "request", "requested", "requests",
    "require", "required", "requires", "requiring", "rescind", "rescinded", "rescue", "rescued",
    "rescuer", "rescues", "rescuing", "research", "resemble", "resembled", "resembles", "resent",
    "resented", "resents", "reserve", "reserved", "reserves", "reservoir", "reside", "resided",
    "residence", "resident", "resides", "residing", "residue", "resign", "resigned", "resigns",
    "resilient", "resin", "resins", "resist", "resistant", "resisted", "resisting", "resists",
    "resolve", "resolved", "resolves", "resolving", "resort", "resorted", "resorts", "resource",
    "resources", "respect", "respected", "respects", "respond", "responded", "responds", "response",
    "rest", "rested", "restful", "resting", "restless", "restore", "restored", "restores",
    "restoring", "restrain", "restrains", "restraint", "restrict", "restricts", "rests", "result",
    "resulted", "resulting", "results", "resume", "resumed", "resumes", "resuming", "retail",
    "retailer", "retain", "retained", "retaining", "retains", "retaliate", "retire", "retired",
    "retires", "retiring", "retort", "retorted", "retorts", "retrace", "retraced", "retract",
    "retracted", "retracts", "retreat", "retreated", "retreats", "retrieve", "retrieved", "retriever",
    "retrieves", "return", "returned", "returning", "returns", "reunion", "reunions", "reunite",
    "reunited", "reveal", "revealed", "revealing", "reveals", "revel", "reveled", "revels",
    "revenge", "revenue", "revenues", "revere", "revered", "reverence", "reverse", "reversed",
    "reverses", "reversing", "revert", "reverted", "reverts", "review", "reviewed", "reviewer",
    "reviewing", "reviews", "revise", "revised", "revises", "revising", "revision", "revival",
    "revive", "revived", "revives", "reviving", "revoke", "revoked", "revokes", "revolt",
    "revolted", "revolts", "revolve", "revolved", "revolver", "revolves", "revolving", "reward",
    "rewarded", "rewarding", "rewards", "rewind", "rewound", "rhyme", "rhymed", "rhymes",
    "rhyming", "rhythm", "rhythmic", "rhythms", "rib", "ribbed", "ribbon", "ribbons",
    "ribs", "rice", "rich", "richer", "riches", "richest", "richly", "rickety",
    "ricochet", "rid", "riddance", "ridden", "ridding", "riddle", "riddled", "riddles",
    "ride", "rider", "riders", "rides", "ridge", "ridged", "ridges", "ridicule",
    "ridiculed", "riding", "rids", "rife", "rifle", "rifled", "rifles", "rift",
    "rifts", "rig", "rigged", "rigging", "right", "rightful", "rightly", "rights",
    "rigid", "rigidly", "rigor", "rigorous", "rigs", "rile", "riled", "rim",
    "rimmed", "rims", "rind", "rinds", "ring", "ringed", "ringing", "rings",
    "rink", "rinks", "rinse", "rinsed", "rinses", "rinsing", "riot", "rioted",
    "rioting", "riots", "rip", "ripe", "ripen", "ripened", "ripens", "riper",
    "ripped", "ripping", "ripple", "rippled", "ripples", "rippling", "rips", "rise",
    "risen", "riser", "rises", "rising", "risk", "risked", "risking", "risks",
    "risky", "rite", "rites", "ritual", "rituals", "rival", "rivaled", "rivalry",
    "rivals", "river", "riverbank", "rivers", "riverside", "rivet", "riveted", "riveting",
    "rivets", "roach", "roaches", "road", "roadblock", "roads", "roadside", "roadway",
    "roam", "roamed", "roaming", "roams", "roar", "roared", "roaring", "roars",
    "roast", "roasted", "roasting", "roasts", "rob", "robbed", "robber", "robbery",
    "robbing", "robe", "robed", "robes", "robin", "robins", "robot", "robotic",
    "robots", "robs", "robust", "rock", "rocked", "rocket", "rocketed", "rockets",
    "rocking", "rocks", "rocky", "rod", "rode", "rodent", "rodents", "rodeo",
    "rodeos", "rods", "rogue", "rogues", "role", "roles", "roll", "rolled",
    "roller", "rolling", "rolls", "romance", "romantic", "romp", "romped", "romping",
    "romps", "roof", "roofed", "roofing", "roofs", "rooftop", "rook", "rookie",
    "rookies", "room", "roommate", "rooms", "roomy", "roost", "roosted", "rooster",
    "roosts", "root", "rooted", "rooting", "roots", "rope", "roped", "ropes",
    "roping", "rose", "rosebud", "roses", "roster", "rosters", "rosy", "rot",
    "rotate", "rotated", "rotates", "rotating", "rotation", "rote", "rotor", "rotors",
    "rots", "rotted", "rotten", "rotting", "rouge", "rough", "roughen", "rougher",
    "roughest", "roughly", "round", "rounded", "rounding", "rounds", "roundup", "rouse",
    "roused", "rouses", "rousing", "rout", "route", "routed", "routes", "routine",
    "routing", "rove", "roved", "rover", "roves", "roving", "row", "rowboat",
    "rowdy", "rowed", "rowing", "rows", "royal", "royally", "royalty", "rub",
    "rubbed", "rubber", "rubbery", "rubbing", "rubble", "rubies", "rubs", "ruby",
    "rudder", "rudders", "ruddy", "rude", "rudely", "ruder", "rudest", "ruffle",
    "ruffled", "ruffles", "rug", "rugged", "rugs", "ruin", "ruined", "ruining",
    "ruins", "rule", "ruled", "ruler", "rulers", "rules", "ruling", "rumble",
    "rumbled", "rumbles", "rumbling", "rummage", "rummaged", "rumor", "rumored", "rumors",
    "rump", "rumple", "rumpled", "run", "rung", "rungs", "runner", "running",
    "runs", "runway", "rupture", "ruptured", "rural", "ruse", "rush", "rushed",
    "rushes", "rushing", "rust", "rusted", "rustic", "rusting", "rustle", "rustled",
    "rustles", "rustling", "rusts", "rusty", "rut", "ruthless", "ruts", "rutted",
    "saber", "sabers", "sable", "sabotage", "sack", "sacked", "sacking", "sacks",
    "sacred", "sacrifice", "sad", "sadden", "saddened", "saddens", "sadder", "saddest",
    "saddle", "saddled", "saddles", "saddling", "sadly", "sadness", "safari", "safaris",
    "safe", "safeguard", "safely", "safer", "safest", "safety", "saffron", "sag",
    "saga", "sagas", "sage", "sages", "sagged", "sagging", "sags", "said",
    "sail", "sailboat", "sailed", "sailing", "sailor", "sails", "saint", "saintly",
    "saints", "sake", "salad", "salads", "salami", "salaries", "salary", "sale",
    "sales", "salesman", "saliva", "salmon", "salon", "salons", "saloon", "saloons",
    "salt", "salted", "salting", "salts", "salty", "salute", "saluted", "salutes",
    "saluting", "salvage", "salvaged", "salve", "same", "sameness", "sample", "sampled",
    "samples", "sampling", "sanction", "sanctions", "sanctuary", "sand", "sandal", "sandals",
    "sanded", "sanding", "sands", "sandwich", "sandy", "sane", "sanely", "sang",
    "sanity", "sank", "sap", "sapling", "sapped", "sapphire", "saps", "sarcasm",
    "sarcastic", "sardine", "sardines", "sash", "sashes", "sat", "satchel", "satellite",
    "satin", "satiny", "satire", "satisfied", "satisfies", "satisfy", "saturate", "saturated",
    "sauce", "saucer", "saucers", "sauces", "saunter", "sauntered", "saunters", "sausage",
    "sausages", "savage", "savagely", "save", "saved", "saves", "saving", "savings",
    "savior", "savor", "savored", "savors", "savory", "saw", "sawdust", "sawed",
    "sawing", "sawmill", "saws", "say", "saying", "says", "scab", "scabs",
    "scaffold", "scald", "scalded", "scalding", "scalds", "scale", "scaled", "scales",
    "scaling", "scallop", "scallops", "scalp", "scalps", "scamper", "scampered", "scampers",
    "scan", "scandal", "scandals", "scanned", "scanner", "scanning", "scans", "scant",
    "scanty", "scar", "scarce", "scarcely", "scarcity", "scare", "scarecrow", "scared",
    "scares", "scarf", "scaring", "scarlet", "scarred", "scars", "scarves", "scary",
    "scatter", "scattered", "scatters", "scavenge", "scavenger", "scene", "scenery", "scenes",
    "scenic", "scent", "scented", "scents", "schedule", "scheduled", "schedules", "scheme",
    "schemed", "schemes", "scheming", "scholar", "scholarly", "scholars", "school", "schooled",
    "schooling", "schools", "schooner", "science", "sciences", "scientist", "scissors", "scoff",
    "scoffed", "scoffing", "scoffs", "scold", "scolded", "scolding", "scolds", "scoop",
    "scooped", "scooping", "scoops", "scoot", "scooter", "scope", "scopes", "scorch",
    "scorched", "scorches", "scorching", "score", "scored", "scorer", "scores", "scoring",
    "scorn", "scorned", "scornful", "scorns", "scour", "scoured", "scouring", "scours",
    "scout", "scouted", "scouting", "scouts", "scowl", "scowled", "scowling", "scowls",
    "scram", "scramble", "scrambled", "scrambles", "scrap", "scrapbook", "scrape", "scraped",
    "scrapes", "scraping", "scrapped", "scraps", "scratch", "scratched", "scratches", "scratchy",
    "scrawl", "scrawled", "scrawls", "scrawny", "scream", "screamed", "screaming", "screams",
    "screech", "screeched", "screeches", "screen", "screened", "screening", "screens", "screw",
    "screwed", "screws", "scribble", "scribbled", "scribbles", "scribe", "scribes", "script",
    "scripted", "scripts", "scroll", "scrolled", "scrolling", "scrolls", "scrounge", "scrounged",
    "scrub", "scrubbed", "scrubbing", "scrubs", "scruff", "scruffy", "scrunch", "scrunched",
    "scruple", "scruples", "scrutiny", "scuff", "scuffed", "scuffle", "scuffs", "sculpt",
    "sculpted", "sculptor", "sculpts", "scum", "scurried", "scurries", "scurry", "sea",
    "seafood", "seagull", "seal", "sealed", "sealing", "seals", "seam", "seamless",
    "seams", "search", "searched", "searches", "searching", "seas", "seashore", "seasick",
    "seaside", "season", "seasonal", "seasoned", "seasons", "seat", "seated", "seating",
    "seats", "seaweed", "secede", "seceded", "second", "secondly", "seconds", "secrecy",
    "secret", "secretly", "secrets", "section", "sectioned", "sections", "sector", "secure",
    "secured", "securely", "secures", "security", "sedan", "sedans", "sedate", "sedated",
    "sediment", "see", "seed", "seeded", "seeding", "seedling", "seeds", "seeing",
    "seek", "seeker", "seeking", "seeks", "seem", "seemed", "seeming", "seemingly",
    "seems", "seen", "seep", "seeped", "seeping", "seeps", "sees", "seesaw",
    "seethe", "seethed", "seethes", "seething", "segment", "segmented", "segments", "seize",
    "seized", "seizes", "seizing", "seizure", "seldom", "select", "selected", "selecting",
    "selection", "selects", "self", "selfish", "selfless", "sell", "seller", "selling",
    "sells", "semester", "seminar", "senate", "senator", "send", "sender", "sending",
    "sends", "senior", "seniors", "sense", "sensed", "senses", "sensible", "sensibly",
    "sensing", "sensitive", "sensor", "sent", "sentence", "sentenced", "sentences", "sentiment",
    "sentinel", "sentries", "sentry", "separate", "separated", "separates", "sequel", "sequels",
    "sequence", "sequences", "sequin", "sequins", "serene", "serenely", "serenity", "sergeant",
    "serial", "serials", "series", "serious", "seriously", "sermon", "sermons", "serpent",
    "serpents", "serum", "servant", "serve", "served", "server", "serves", "service",
    "services", "serving", "session", "sessions", "set", "setback", "sets", "setting",
    "settle", "settled", "settler", "settles", "settling", "seven", "seventeen", "seventh",
    "seventy", "sever", "several", "severe", "severed", "severely", "severity", "severs",
    "sew", "sewed", "sewing", "sewn", "sews", "shack", "shackle", "shackled",
    "shackles", "shacks", "shade", "shaded", "shades", "shading", "shadow", "shadowed",
    "shadows", "shadowy", "shady", "shaft", "shafts", "shaggy", "shake", "shaken",
    "shakes", "shaking", "shaky", "shale", "shall", "shallow", "shallows", "sham",
    "shamble", "shambles", "shame", "shamed", "shameful", "shameless", "shames", "shampoo",
    "shams", "shape", "shaped", "shapely", "shapes", "shaping", "share", "shared",
    "shares", "sharing", "shark", "sharks", "sharp", "sharpen", "sharpened", "sharpens",
    "sharper", "sharpest", "sharply", "shatter", "shattered", "shatters", "shave", "shaved",
    "shaven", "shaves", "shaving", "shawl", "shawls", "shear", "sheared", "shearing",
    "shears", "sheath", "sheathe", "sheathed", "shed", "shedding", "sheds", "sheen",
    "sheep", "sheepish", "sheer", "sheet", "sheets", "shelf", "shell", "shelled",
    "shelling", "shells", "shelter", "sheltered", "shelters", "shelve", "shelved", "shelves",
    "shepherd", "shepherds", "sheriff", "sheriffs", "shield", "shielded", "shielding", "shields",
    "shift", "shifted", "shifting", "shifts", "shifty", "shimmer", "shimmered", "shimmers",
    "shin", "shine", "shines", "shingle", "shingles", "shining", "shins", "shiny",
    "ship", "shipment", "shipped", "shipping", "ships", "shipwreck", "shirk", "shirked",
    "shirt", "shirts", "shiver", "shivered", "shivering", "shivers", "shoal", "shoals",
    "shock", "shocked", "shocking", "shocks", "shoddy", "shoe", "shoelace", "shoemaker",
    "shoes", "shone", "shook", "shoot", "shooter", "shooting", "shoots", "shop",
    "shopped", "shopper", "shopping", "shops", "shore", "shoreline", "shores", "short",
    "shortage", "shortcut", "shorten", "shortened", "shortens", "shorter", "shortest", "shortfall",
    "shortly", "shorts", "shot", "shotgun", "shots", "should", "shoulder", "shoulders",
    "shout", "shouted", "shouting", "shouts", "shove", "shoved", "shovel", "shoveled",
    "shovels", "shoves", "shoving", "show", "showcase", "showdown", "showed", "shower",
    "showered", "showering", "showers", "showing", "shown", "shows", "shrank", "shred",
    "shredded", "shredding", "shreds", "shrewd", "shrewdly", "shriek", "shrieked", "shrieking",
    "shrieks", "shrill", "shrimp", "shrine", "shrines", "shrink", "shrinking", "shrinks",
    "shrivel", "shriveled", "shroud", "shrouded", "shrub", "shrubbery", "shrubs", "shrug",
    "shrugged", "shrugging", "shrugs", "shrunk", "shudder", "shuddered", "shudders", "shuffle",
    "shuffled", "shuffles", "shuffling", "shun", "shunned", "shuns", "shush", "shushed",
    "shut", "shuts", "shutter", "shutters", "shutting", "shuttle", "shuttled", "shuttles",
    "shy", "shyly", "shyness", "sibling", "siblings", "sick", "sicken", "sickened",
    "sickens", "sickly", "sickness", "side", "sidebar", "sided", "sideline", "sides",
    "sidewalk", "sideways", "siding", "siege", "sieges", "sieve", "sieves", "sift",
    "sifted", "sifting", "sifts", "sigh", "sighed", "sighing", "sighs", "sight",
    "sighted", "sighting", "sightless", "sights", "sign", "signal", "signaled", "signaling",
    "signals", "signed", "signer", "signified", "signifies", "signify", "signing", "signpost",
    "signs", "silence", "silenced", "silences", "silent", "silently", "silk", "silken",
    "silks", "silky", "sill", "sillier", "silliest", "sills", "silly", "silo",
    "silos", "silt", "silver", "silvery", "similar", "similarly", "simmer", "simmered",
    "simmering", "simmers", "simple", "simpler", "simplest", "simplify", "simply", "simulate",
    "simulated", "sin", "since", "sincere", "sincerely", "sinful", "sing", "singe",
    "singed", "singer", "singing", "single", "singled", "singles", "singly", "sings",
    "singular", "sinister", "sink", "sinking", "sinks", "sinned", "sinner", "sinning",
    "sins", "sip", "siphon", "siphoned", "sipped", "sipping", "sips", "sir",
    "sire", "siren", "sirens", "sirs", "sister", "sisterly", "sisters", "sit",
    "site", "sites", "sits", "sitter", "sitting", "situate", "situated", "situation",
    "six", "sixteen", "sixth", "sixty", "sizable", "size", "sized", "sizes",
    "sizing", "sizzle", "sizzled", "sizzles", "sizzling", "skate", "skated", "skater",
    "skates", "skating", "skeletal", "skeleton", "skeletons", "skeptic", "skeptical", "sketch",
    "sketched", "sketches", "sketching", "sketchy", "skew", "skewed", "skewer", "ski",
    "skid", "skidded", "skidding", "skids", "skied", "skier", "skies", "skiing",
    "skill", "skilled", "skillet", "skillful", "skills", "skim", "skimmed", "skimming",
    "skimp", "skimpy", "skims", "skin", "skinned", "skinny", "skins", "skip",
    "skipped", "skipper", "skipping", "skips", "skirmish", "skirt", "skirted", "skirts",
    "skis", "skit", "skits", "skitter", "skittered", "skulk", "skulked", "skull",
    "skulls", "skunk", "skunks", "sky", "skyline", "skyward", "slab", "slabs",
    "slack", "slacken", "slackened", "slain", "slam", "slammed", "slamming", "slams",
    "slander", "slang", "slant", "slanted", "slanting", "slants", "slap", "slapped",
    "slapping", "slaps", "slash", "slashed", "slashes", "slashing", "slat", "slate",
    "slated", "slates", "slats", "slatted", "slaughter", "slave", "slavery", "slaves",
    "slay", "slaying", "slays", "sled", "sledding", "sleds", "sleek", "sleekly",
    "sleep", "sleeping", "sleepless", "sleeps", "sleepy", "sleet", "sleeve", "sleeved",
    "sleeves", "sleigh", "sleighs", "slender", "slept", "slew", "slice", "sliced",
    "slices", "slicing", "slick", "slicker", "slid", "slide", "slides", "sliding",
    "slight", "slighted", "slightly", "slim", "slime", "slimmer", "slimy", "sling",
    "slinging", "slings", "slink", "slinking", "slinks", "slip", "slipped", "slipper",
    "slippery", "slipping", "slips", "slit", "slither", "slithered", "slithers", "slits",
    "slitting", "sliver", "slivers", "slogan", "slogans", "slop", "slope", "sloped",
    "slopes", "sloping", "slopped", "sloppy", "slops", "slosh", "sloshed", "slot",
    "sloth", "sloths", "slots", "slotted", "slouch", "slouched", "slouches", "slow",
    "slowed", "slower", "slowest", "slowing", "slowly", "slows", "sludge", "slug",
    "sluggish", "slugs", "slum", "slumber", "slump", "slumped", "slumps", "slums",
    "slung", "slur", "slurp", "slurred", "slurs", "sly", "slyly", "smack",
    "smacked", "smacking", "smacks", "small", "smaller", "smallest", "smart", "smarter",
    "smartest", "smartly", "smash", "smashed", "smashes", "smashing", "smear", "smeared",
    "smearing", "smears", "smell", "smelled", "smelling", "smells", "smelly", "smelt",
    "smelter", "smidgen", "smile", "smiled", "smiles", "smiling", "smirk", "smirked",
    "smirks", "smite", "smith", "smiths", "smitten", "smock", "smocks", "smog",
    "smoggy", "smoke", "smoked", "smoker", "smokes", "smoking", "smoky", "smolder",
    "smoldered", "smolders", "smooth", "smoothed", "smoother", "smoothly", "smooths", "smother",
    "smothered", "smothers", "smudge", "smudged", "smudges", "smug", "smuggle", "smuggled",
    "smuggler", "smuggles", "smugly", "snack", "snacked", "snacking", "snacks", "snag",
    "snagged", "snagging", "snags", "snail", "snails", "snake", "snaked", "snakes",
    "snaking", "snap", "snapped", "snapping", "snaps", "snapshot", "snare", "snared",
    "snares", "snaring", "snarl", "snarled", "snarling", "snarls", "snatch", "snatched",
    "snatches", "snatching", "sneak", "sneaked", "sneaking", "sneaks", "sneaky", "sneer",
    "sneered", "sneering", "sneers", "sneeze", "sneezed", "sneezes", "sneezing", "snicker",
    "snickered", "snickers", "snide", "sniff", "sniffed", "sniffing", "sniffle", "sniffs",
    "snip", "snipe", "sniper", "snipped", "snippet", "snippets", "snipping", "snips",
    "snob", "snobbish", "snobs", "snoop", "snooped", "snooping", "snoops", "snooze",
    "snoozed", "snoozes", "snoozing", "snore", "snored", "snores", "snoring", "snorkel",
    "snort", "snorted", "snorting", "snorts", "snout", "snouts", "snow", "snowball",
    "snowed", "snowfall", "snowflake", "snowing", "snowman", "snows", "snowstorm", "snowy",
    "snub", "snubbed", "snubs", "snug", "snuggle", "snuggled", "snugly", "soak",
    "soaked", "soaking", "soaks", "soap", "soaped", "soaps", "soapy", "soar",
    "soared", "soaring", "soars", "sob", "sobbed", "sobbing", "sober", "soberly",
    "sobs", "soccer", "social", "socially", "society", "sock", "socket", "sockets",
    "socks", "sod", "soda", "sodas", "sofa", "sofas", "soft", "soften",
    "softened", "softens", "softer", "softest", "softly", "soggy", "soil", "soiled",
    "soils", "solace", "solar", "sold", "solder", "soldier", "soldiers", "sole",
    "solely", "solemn", "solemnly", "solicit", "solicited", "solid", "solidify", "solidly",
    "solids", "solitary", "solitude", "solo", "soloist", "solos", "soluble", "solution",
    "solutions", "solve", "solved", "solvent", "solves", "solving", "somber", "some",
    "somebody", "someday", "somehow", "someone", "something", "sometime", "sometimes", "somewhat",
    "somewhere", "son", "song", "songbird", "songs", "sonic", "sonnet", "sons",
    "soon", "sooner", "soonest", "soot", "soothe", "soothed", "soothes", "soothing",
    "sooty", "sop", "sopping", "sorcerer", "sorcery", "sordid", "sore", "sorely",
    "sores", "sorrier", "sorrow", "sorrowful", "sorrows", "sorry", "sort", "sorted",
    "sorting", "sorts", "sought", "soul", "soulful", "souls", "sound", "sounded",
    "sounding", "soundly", "sounds", "soup", "soups", "sour", "source", "sources",
    "soured", "souring", "sourly", "sours", "south", "southeast", "southern", "southwest",
    "souvenir", "sovereign", "sow", "sowed", "sowing", "sown", "sows", "space",
    "spaced", "spaces", "spacing", "spacious", "spade", "spades", "spaghetti", "span",
    "spangle", "spangled", "spaniel", "spank", "spanked", "spanking", "spanks", "spanned",
    "spanning", "spans", "spar", "spare", "spared", "spares", "sparing", "sparingly",
    "spark", "sparked", "sparking", "sparkle", "sparkled", "sparkles", "sparkling", "sparks",
    "sparred", "sparring", "sparrow", "sparrows", "spars", "sparse", "sparsely", "spasm",
    "spasms", "spat", "spats", "spatter", "spattered", "spatula", "spawn", "spawned",
    "spawning", "spawns", "speak", "speaker", "speaking", "speaks", "spear", "speared",
    "spearmint", "spears", "special", "specially", "specialty", "species", "specific", "specifics",
    "specified", "specify", "specimen", "specimens", "speck", "speckled", "specks", "spectacle",
    "spectator", "specter", "spectrum", "sped", "speech", "speeches", "speed", "speeding",
    "speeds", "speedy", "spell", "spelled", "speller", "spelling", "spells", "spend",
    "spender", "spending", "spends", "spent", "sphere", "spheres", "spherical", "spice",
    "spiced", "spices", "spicy", "spider", "spiders", "spied", "spies", "spigot",
    "spike", "spiked", "spikes", "spiky", "spill", "spilled", "spilling", "spills",
    "spin", "spinach", "spindle", "spindles", "spine", "spineless", "spines", "spinner",
    "spinning", "spins", "spiral", "spiraled", "spirals", "spire", "spires", "spirit",
    "spirited", "spirits", "spit", "spite", "spiteful", "spits", "spitting", "splash",
    "splashed", "splashes", "splashing", "splatter", "splendid", "splendor", "splice", "spliced",
    "splint", "splinter", "splinters", "splints", "split", "splits", "splitting", "splurge",
    "splurged", "spoil", "spoiled", "spoiling", "spoils", "spoke", "spoken", "spokes",
    "sponge", "sponged", "sponges", "spongy", "sponsor", "sponsored", "sponsors", "spool",
    "spools", "spoon", "spooned", "spoonful", "spoons", "sporadic", "spore", "spores",
    "sport", "sporting", "sports", "sporty", "spot", "spotless", "spotlight", "spots",
    "spotted", "spotting", "spouse", "spouses", "spout", "spouted", "spouting", "spouts",
    "sprain", "sprained", "sprains", "sprang", "sprawl", "sprawled", "sprawling", "sprawls",
    "spray", "sprayed", "sprayer", "spraying", "sprays", "spread", "spreader", "spreading",
    "spreads", "spree", "sprees", "sprig", "sprigs", "spring", "springing", "springs",
    "springy", "sprinkle", "sprinkled", "sprinkler", "sprinkles", "sprint", "sprinted", "sprinter",
    "sprinting", "sprints", "sprout", "sprouted", "sprouting", "sprouts", "spruce", "spruced",
    "spruces", "sprung", "spry", "spun", "spur", "spurn", "spurned", "spurns",
    "spurred", "spurring", "spurs", "spurt", "spurted", "spurts", "sputter", "sputtered",
    "sputters", "spy", "spying", "squabble", "squabbled", "squad", "squadron", "squads",
    "squall", "squalls", "squander", "square", "squared", "squarely", "squares", "squash",
    "squashed", "squashes", "squat", "squats", "squatted", "squatting", "squawk", "squawked",
    "squawks", "squeak", "squeaked", "squeaks", "squeaky", "squeal", "squealed", "squeals",
    "squeamish", "squeeze", "squeezed", "squeezes", "squeezing", "squelch", "squelched", "squid",
    "squiggle", "squiggles", "squiggly", "squint", "squinted", "squinting", "squints", "squire",
    "squires", "squirm", "squirmed", "squirming", "squirms", "squirrel", "squirrels", "squirt",
    "squirted", "squirting", "squirts", "stab", "stabbed", "stabbing", "stability", "stabilize",
    "stable", "stabled", "stables", "stabs", "stack", "stacked", "stacking", "stacks",
    "stadium", "stadiums", "staff", "staffed", "staffing", "staffs", "stag", "stage",
    "staged", "stages", "stagger", "staggered", "staggers", "staging", "stagnant", "stags",
    "staid", "stain", "stained", "staining", "stainless", "stains", "stair", "staircase",
    "stairs", "stairway", "stake", "staked", "stakes", "staking", "stale", "staler",
    "stalk", "stalked", "stalking", "stalks", "stall", "stalled", "stalling", "stallion",
    "stallions", "stalls", "stalwart", "stamina", "stammer", "stammered", "stammers", "stamp",
    "stamped", "stampede", "stamping", "stamps", "stance", "stand", "standard", "standards",
    "standby", "standing", "standoff", "stands", "stank", "stanza", "stanzas", "staple",
    "stapled", "stapler", "staples", "star", "starboard", "starch", "starches", "starchy",
    "stardom", "stare", "stared", "stares", "starfish", "staring", "stark", "starkly",
    "starlight", "starred", "starring", "starry", "stars", "start", "started", "starter",
    "starting", "startle", "startled", "startles", "startling", "starts", "starve", "starved",
    "starves", "starving", "stash", "stashed", "stashes", "state", "stated", "statement",
    "states", "static", "stating", "station", "stationed", "stations", "statue", "statues",
    "stature", "status", "statute", "staunch", "stave", "staved", "staves", "stay",
    "stayed", "staying", "stays", "stead", "steadfast", "steadied", "steadies", "steadily",
    "steady", "steak", "steaks", "steal", "stealing", "steals", "stealth", "stealthy",
    "steam", "steamboat", "steamed", "steaming", "steams", "steamy", "steed", "steeds",
    "steel", "steely", "steep", "steeper", "steepest", "steeple", "steeples", "steeply",
    "steer", "steered", "steering", "steers", "stem", "stemmed", "stemming", "stems",
    "stench", "stencil", "stencils", "step", "stepped", "stepping", "steps", "stereo",
    "stereos", "sterile", "sterilize", "stern", "sternly", "stew", "steward", "stewards",
    "stewed", "stewing", "stews", "stick", "sticker", "sticking", "sticks", "sticky",
    "stiff", "stiffen", "stiffened", "stiffens", "stiffly", "stifle", "stifled", "stifles",
    "stifling", "stigma", "still", "stilled", "stillness", "stills", "stilt", "stilted",
    "stilts", "stimulate", "stimulus", "sting", "stinger", "stinging", "stings", "stingy",
    "stink", "stinking", "stinks", "stint", "stints", "stipend", "stipulate", "stir",
    "stirred", "stirring", "stirrup", "stirrups", "stirs", "stitch", "stitched", "stitches",
    "stitching", "stock", "stockade", "stocked", "stocking", "stockpile", "stocks", "stocky",
    "stodgy", "stoic", "stoke", "stoked", "stokes", "stoking", "stole", "stolen",
    "stomach", "stomachs", "stomp", "stomped", "stomping", "stomps", "stone", "stoned",
    "stones", "stony", "stood", "stool", "stools", "stoop", "stooped", "stooping",
    "stoops", "stop", "stopped", "stopper", "stopping", "stops", "stopwatch", "storage",
    "store", "stored", "stores", "stories", "storing", "stork", "storks", "storm",
    "stormed", "storming", "storms", "stormy", "story", "storybook", "stout", "stoutly",
    "stove", "stoves", "stow", "stowaway", "stowed", "stowing", "stows", "straddle",
    "straddled", "straggle", "straggled", "straggler", "straight", "strain", "strained", "strainer",
    "straining", "strains", "strait", "straits", "strand", "stranded", "strands", "strange",
    "strangely", "stranger", "strangest", "strangle", "strangled", "strangles", "strap", "strapped",
    "strapping", "straps", "strategic", "strategy", "straw", "straws", "stray", "strayed",
    "straying", "strays", "streak", "streaked", "streaking", "streaks", "stream", "streamed",
    "streaming", "streams", "street", "streetcar", "streets", "strength", "strengths", "strenuous",
    "stress", "stressed", "stresses", "stressful", "stretch", "stretched", "stretcher", "stretches",
    "strewn", "stricken", "strict", "stricter", "strictly", "stride", "strides", "striding",
    "strife", "strike", "striker", "strikes", "striking", "string", "stringing", "strings",
    "stringy", "strip", "stripe", "striped", "stripes", "stripped", "stripping", "strips",
    "strive", "striven", "strives", "striving", "strode", "stroke", "stroked", "strokes",
    "stroking", "stroll", "strolled", "stroller", "strolling", "strolls", "strong", "stronger",
    "strongest", "strongly", "strove", "struck", "struggle", "struggled", "struggles", "strum",
    "strummed", "strumming", "strums", "strung", "strut", "struts", "strutted", "strutting",
    "stub", "stubbed", "stubble", "stubborn", "stubs", "stucco", "stuck", "stud",
    "studded", "student", "students", "studied", "studies", "studio", "studios", "studious",
    "studs", "study", "studying", "stuff", "stuffed", "stuffing", "stuffs", "stuffy",
    "stumble", "stumbled", "stumbles", "stumbling", "stump", "stumped", "stumps", "stun",
    "stung", "stunk", "stunned", "stunning", "stuns", "stunt", "stunted", "stunts",
    "stupid", "stupidity", "stupor", "sturdier", "sturdiest", "sturdy", "stutter", "stuttered",
    "stutters", "style", "styled", "styles", "styling", "stylish", "suave", "subdue",
    "subdued", "subdues", "subject", "subjected", "subjects", "sublime", "submarine", "submerge",
    "submerged", "submerges", "submit", "submits", "submitted", "subscribe", "subside", "subsided",
    "subsides", "subsidize", "subsidy", "substance", "subtle", "subtly", "subtract", "subtracts",
    "suburb", "suburban", "suburbs", "subway", "subways", "succeed", "succeeded", "succeeds",
    "success", "succinct", "succulent", "succumb", "succumbed", "such", "suction", "sudden",
    "suddenly", "suds", "sudsy", "sue", "sued", "suede", "sues", "suffer",
    "suffered", "suffering", "suffers", "suffice", "suffix", "suffixes", "suffocate", "sugar",
    "sugars", "sugary", "suggest", "suggested", "suggests", "suing", "suit", "suitable",
    "suitcase", "suite", "suited", "suites", "suiting", "suitor", "suits", "sulfur",
    "sulk", "sulked", "sulking", "sulks", "sulky", "sullen", "sultry", "sum",
    "summed", "summer", "summers", "summery", "summing", "summit", "summits", "summon",
    "summoned", "summons", "sums", "sun", "sunbeam", "sunburn", "sundae", "sunder",
    "sundown", "sundry", "sunflower", "sung", "sunk", "sunken", "sunlight", "sunned",
    "sunny", "sunrise", "suns", "sunset", "sunshine", "super", "superb", "superbly",
    "superior", "supervise", "supper", "suppers", "supple", "supplied", "supplier", "supplies",
    "supply", "support", "supported", "supporter", "supports", "suppose", "supposed", "supposes",
    "supposing", "suppress", "supreme", "supremely", "sure", "surely", "surer", "surest",
    "surf", "surface", "surfaced", "surfaces", "surfacing", "surfboard", "surfed", "surfer",
    "surfing", "surfs", "surge", "surged", "surgeon", "surgery", "surges", "surgical",
    "surging", "surly", "surmise", "surmised", "surmount", "surname", "surnames", "surpass",
    "surpassed", "surpasses", "surplus", "surprise", "surprised", "surprises", "surrender", "surround",
    "surrounds", "survey", "surveyed", "surveying", "surveyor", "surveys", "survival", "survive",
    "survived", "survives", "surviving", "survivor", "suspect", "suspected", "suspects", "suspend",
    "suspended", "suspends", "suspense", "suspicion", "sustain", "sustained", "sustains", "swab",
    "swabbed", "swabs", "swagger", "swaggered", "swaggers", "swallow", "swallowed", "swallows",
    "swam", "swamp", "swamped", "swamps", "swampy", "swan", "swans", "swap",
    "swapped", "swapping", "swaps", "swarm", "swarmed", "swarming", "swarms", "swat",
    "swath", "swathe", "swats", "swatted", "swatting", "sway", "swayed", "swaying",
    "sways", "swear", "swearing", "swears", "sweat", "sweated", "sweater", "sweating",
    "sweats", "sweaty", "sweep", "sweeper", "sweeping", "sweeps", "sweet", "sweeten",
    "sweetened", "sweetens", "sweeter", "sweetest", "sweetly", "sweets", "swell", "swelled",
    "swelling", "swells", "swelter", "swept", "swerve", "swerved", "swerves", "swerving",
    "swift", "swifter", "swiftest", "swiftly", "swim", "swimmer", "swimming", "swims",
    "swindle", "swindled", "swindler", "swindles", "swine", "swing", "swinging", "swings",
    "swipe", "swiped", "swipes", "swiping", "swirl", "swirled", "swirling", "swirls",
    "swish", "swished", "swishes", "swishing", "switch", "switched", "switches", "switching",
    "swivel", "swiveled", "swivels", "swollen", "swoon", "swooned", "swoop", "swooped",
    "swooping", "swoops", "sword", "swordfish", "swords", "swore", "sworn", "swum",
    "swung", "sycamore", "syllable", "syllables", "symbol", "symbolic", "symbolize", "symbols",
    "symmetry", "sympathy", "symphony", "symptom", "symptoms", "syndicate", "synonym", "synonyms",
    "syntax", "synthetic", "syrup", "syrupy", "system", "systems", "tab", "tabbed",
    "table", "tables", "tablet", "tabletop", "tablets", "taboo", "tabs", "tack",
    "tacked", "tacking", "tackle", "tackled", "tackles", "tacks", "tacky", "tact",
    "tactful", "tactic", "tactical", "tactics", "tadpole", "tadpoles", "taffy", "tag",
    "tagged", "tagging", "tags", "tail", "tailed", "tailgate", "tailing", "tailor",
    "tailored", "tailors", "tails", "taint", "tainted", "taints", "take", "taken",
    "takeoff", "taker", "takes", "taking", "tale", "talent", "talented", "talents",
    "tales", "talk", "talkative", "talked", "talker", "talking", "talks", "tall",
    "taller", "tallest", "tallied", "tallies", "tallow", "tally", "talon", "talons",
    "tame", "tamed", "tamely", "tamer", "tames", "taming", "tamper", "tampered",
    "tampers", "tan", "tandem", "tang", "tangent", "tangerine", "tangible", "tangle",
    "tangled", "tangles", "tangling", "tango", "tangy", "tank", "tanker", "tanks",
    "tanned", "tanning", "tans", "tantrum", "tantrums", "tap", "tape", "taped",
    "taper", "tapered", "tapering", "tapers", "tapes", "tapestry", "taping", "tapped",
    "tapping", "taps", "tar", "tardy", "target", "targeted", "targeting", "targets",
    "tariff", "tariffs", "tarnish", "tarnished", "tarnishes", "tarp", "tarps", "tarred",
    "tars", "tart", "tarts", "task", "tasked", "tasks", "tassel", "tassels",
    "taste", "tasted", "tasteful", "tastes", "tasting", "tasty", "tatter", "tattered",
    "tattle", "tattled", "tattoo", "tattoos", "taught", "taunt", "taunted", "taunting",
    "taunts", "taut", "tautly", "tavern", "taverns", "tawny", "tax", "taxed",
    "taxes", "taxi", "taxing", "taxis", "tea", "teach", "teacher", "teaches",
    "teaching", "teacup", "teak", "team", "teamed", "teaming", "teammate", "teams",
    "teamwork", "teapot", "tear", "tearful", "tearing", "tears", "teas", "tease",
    "teased", "teases", "teasing", "technical", "technique", "tedious", "teem", "teemed",
    "teeming", "teems", "teen", "teenage", "teenager", "teens", "teeter", "teetered",
    "teeters", "teeth", "telegram", "telegraph", "telephone", "telescope", "tell", "teller",
    "telling", "tells", "temper", "temperate", "tempers", "tempest", "template", "templates",
    "temple", "temples", "tempo", "temporary", "tempt", "tempted", "tempting", "tempts",
    "ten", "tenacious", "tenacity", "tenant", "tenants", "tend", "tended", "tendency",
    "tender", "tenderly", "tending", "tendon", "tendons", "tendril", "tendrils", "tends",
    "tenement", "tenet", "tenets", "tennis", "tenor", "tenors", "tens", "tense",
    "tensely", "tension", "tent", "tentacle", "tentacles", "tentative", "tenth", "tents",
    "tenure", "tepid", "term", "termed", "terminal", "terminate", "termite", "termites",
    "terms", "terrace", "terraced", "terraces", "terrain", "terrible", "terribly", "terrier",
    "terriers", "terrific", "terrified", "terrify", "territory", "terror", "terrors", "terse",
    "tersely", "test", "testament", "tested", "tester", "testified", "testify", "testimony",
    "testing", "tests", "tether", "tethered", "tethers", "text", "textbook", "textile",
    "textiles", "texts", "texture", "textured", "textures", "than", "thank", "thanked",
    "thankful", "thanking", "thanks", "that", "thatch", "thatched", "thaw", "thawed",
    "thawing", "thaws", "the", "theater", "theaters", "thee", "theft", "thefts",
    "their", "theirs", "them", "theme", "themes", "then", "thence", "theories",
    "theory", "therapist", "therapy", "there", "thereby", "therefore", "thermal", "these",
    "thesis", "they", "thick", "thicken", "thickened", "thickens", "thicker", "thickest",
    "thicket", "thickly", "thief", "thieves", "thigh", "thighs", "thimble", "thimbles",
    "thin", "thing", "things", "think", "thinker", "thinking", "thinks", "thinly",
    "thinned", "thinner", "thinnest", "thinning", "thins", "third", "thirdly", "thirst",
    "thirsts", "thirsty", "thirteen", "thirty", "this", "thistle", "thistles", "thorn",
    "thorns", "thorny", "thorough", "those", "thou", "though", "thought", "thoughts",
    "thousand", "thousands", "thrash", "thrashed", "thrashes", "thrashing", "thread", "threaded",
    "threading", "threads", "threat", "threaten", "threatens", "threats", "three", "thresh",
    "threshold", "threw", "thrift", "thrifty", "thrill", "thrilled", "thriller", "thrilling",
    "thrills", "thrive", "thrived", "thrives", "thriving", "throat", "throats", "throb",
    "throbbed", "throbbing", "throbs", "throne", "thrones", "throng", "thronged", "throngs",
    "throttle", "throttled", "through", "throw", "throwing", "thrown", "throws", "thrust",
    "thrusting", "thrusts", "thud", "thudded", "thuds", "thug", "thugs", "thumb",
    "thumbed", "thumbs", "thump", "thumped", "thumping", "thumps", "thunder", "thundered",
    "thunders", "thus", "thwart", "thwarted", "thwarts", "thyme", "tiara", "tick",
    "ticked", "ticket", "ticketed", "tickets", "ticking", "tickle", "tickled", "tickles",
    "tickling", "ticklish", "ticks", "tidal", "tidbit", "tidbits", "tide", "tides",
    "tidied", "tidily", "tidy", "tie", "tied", "tier", "tiered", "tiers",
    "ties", "tiger", "tigers", "tight", "tighten", "tightened", "tightens", "tighter",
    "tightest", "tightly", "tile", "tiled", "tiles", "tiling", "till", "tilled",
    "tilling", "tills", "tilt", "tilted", "tilting", "tilts", "timber", "timbers",
    "time", "timed", "timeless", "timely", "timer", "times", "timid", "timidly",
    "timing", "tin", "tinder", "tinfoil", "tinge", "tinged", "tingle", "tingled",
    "tingles", "tingling", "tinier", "tiniest", "tinker", "tinkered", "tinkers", "tinkle",
    "tinkled", "tins", "tinsel", "tint", "tinted", "tints", "tiny", "tip",
    "tipped", "tipping", "tips", "tiptoe", "tiptoed", "tiptoes", "tirade", "tire",
    "tired", "tireless", "tires", "tiresome", "tiring", "tissue", "tissues", "titan",
    "titanic", "title", "titled", "titles", "toad", "toads", "toadstool", "toast",
    "toasted", "toaster", "toasting", "toasts", "tobacco", "toboggan", "today", "toddle",
    "toddler", "toddlers", "toe", "toes", "toffee", "together", "toil", "toiled",
    "toiling", "toils", "token", "tokens", "told", "tolerant", "tolerate", "tolerated",
    "tolerates", "toll", "tolled", "tolls", "tomato", "tomatoes", "tomb", "tombs",
    "tombstone", "tomorrow", "ton", "tone", "toned", "tones", "tongs", "tongue",
    "tongues", "tonic", "tonight", "toning", "tons", "tonsil", "tonsils", "too",
    "took", "tool", "toolbox", "tools", "toot", "tooted", "tooth", "toothache",
    "toots", "top", "topaz", "topic", "topical", "topics", "topmost", "topped",
    "topping", "topple", "toppled", "topples", "toppling", "tops", "torch", "torched",
    "torches", "tore", "torment", "tormented", "torments", "torn", "tornado", "torpedo",
    "torrent", "torrents", "torrid", "torso", "tortoise", "torture", "tortured", "toss",
    "tossed", "tosses", "tossing", "tot", "total", "totaled", "totally", "totals",
    "tots", "totter", "tottered", "totters", "touch", "touched", "touches", "touching",
    "tough", "toughen", "toughened", "tougher", "toughest", "tour", "toured", "touring",
    "tourist", "tours", "tousle", "tousled", "tow", "toward", "towards", "towed",
    "towel", "towels", "tower", "towered", "towering", "towers", "towing", "town",
    "towns", "township", "tows", "toxic", "toxin", "toxins", "toy", "toyed",
    "toying", "toys", "trace", "traced", "tracer", "traces", "tracing", "track",
    "tracked", "tracker", "tracking", "tracks", "tract", "traction", "tractor", "tracts",
    "trade", "traded", "trader", "trades", "trading", "tradition", "traffic", "tragedies",
    "tragedy", "tragic", "trail", "trailed", "trailer", "trailing", "trails", "train",
    "trained", "trainer", "training", "trains", "trait", "traitor", "traits", "tramp",
    "tramped", "trample", "trampled", "tramples", "tramps", "trance", "trances", "tranquil",
    "transact", "transcend", "transfer", "transfers", "transform", "transit", "translate", "transmit",
    "transmits", "transport", "trap", "trapeze", "trapped", "trapper", "trapping", "traps",
    "trash", "trashed", "travel", "traveled", "traveler", "traveling", "travels", "traverse",
    "traversed", "travesty", "trawl", "trawler", "tray", "trays", "treachery", "tread",
    "treading", "treads", "treason", "treasure", "treasured", "treasures", "treasury", "treat",
    "treated", "treaties", "treating", "treatment", "treats", "treaty", "treble", "tree",
    "trees", "treetop", "trek", "trekked", "trekking", "treks", "trellis", "tremble",
    "trembled", "trembles", "trembling", "tremor", "tremors", "trench", "trenches", "trend",
    "trends", "trendy", "trespass", "trestle", "trial", "trials", "triangle", "triangles",
    "tribal", "tribe", "tribes", "tribute", "tributes", "trick", "tricked", "trickery",
    "tricking", "trickle", "trickled", "trickles", "trickling", "tricks", "tricky", "tricycle",
    "trident", "tried", "tries", "trifle", "trifles", "trifling", "trigger", "triggered",
    "triggers", "trill", "trilled", "trim", "trimmed", "trimming", "trims", "trinket",
    "trinkets", "trio", "trios", "trip", "triple", "tripled", "tripod", "tripped",
    "tripping", "trips", "triumph", "triumphed", "triumphs", "trivia", "trivial", "trod",
    "trodden", "troll", "trolley", "trolleys", "trolls", "trombone", "troop", "trooper",
    "troops", "trophies", "trophy", "tropical", "tropics", "trot", "trots", "trotted",
    "trotting", "trouble", "troubled", "troubles", "troubling", "trough", "troughs", "trounce",
    "trounced", "troupe", "troupes", "trousers", "trout", "trowel", "truant", "truce",
    "truces", "truck", "trucker", "trucks", "trudge", "trudged", "trudges", "trudging",
    "true", "truer", "truest", "truffle", "truffles", "truly", "trumpet", "trumpeted",
    "trumpets", "trunk", "trunks", "truss", "trussed", "trust", "trusted", "trusting",
    "trusts", "trusty", "truth", "truthful", "truths", "try", "trying", "tryout",
    "tub", "tuba", "tube", "tubes", "tubing", "tubs", "tuck", "tucked",
    "tucking", "tucks", "tuft", "tufted", "tufts", "tug", "tugboat", "tugged",
    "tugging", "tugs", "tuition", "tulip", "tulips", "tumble", "tumbled", "tumbler",
    "tumbles", "tumbling", "tummy", "tumult", "tuna", "tundra", "tune", "tuned",
    "tuner", "tunes", "tunic", "tunics", "tuning", "tunnel", "tunneled", "tunnels",
    "turban", "turbans", "turbine", "turbines", "turbulent", "turf", "turkey", "turkeys",
    "turmoil", "turn", "turned", "turning", "turnip", "turnips", "turnout", "turnover",
    "turnpike", "turns", "turquoise", "turret", "turrets", "turtle", "turtles", "tusk",
    "tusked", "tusks", "tussle", "tussled", "tutor", "tutored", "tutors", "tuxedo",
    "tweak", "tweaked", "tweaks", "tweed", "tweezers", "twelfth", "twelve", "twenty",
    "twice", "twiddle", "twiddled", "twig", "twigs", "twilight", "twin", "twine",
    "twined", "twinge", "twinges", "twinkle", "twinkled", "twinkles", "twinkling", "twins",
    "twirl", "twirled", "twirling", "twirls", "twist", "twisted", "twister", "twisting",
    "twists", "twitch", "twitched", "twitches", "twitching", "twitter", "twittered", "two",
    "twofold", "tycoon", "tycoons", "tying", "type", "typed", "types", "typical",
    "typically", "typing", "typist", "typo", "typos", "tyranny", "tyrant", "tyrants",
    "udder", "udders", "uglier", "ugliest", "ugly", "ulcer", "ulcers", "ultimate",
    "umbrella", "umbrellas", "umpire", "umpired", "umpires", "unable", "unaware", "unbeaten",
    "unbiased", "unbolt", "unbolted", "unbroken", "unbutton", "uncanny", "uncertain", "unchanged",
    "uncle", "unclear", "uncles", "uncommon", "uncouth", "uncover", "uncovered", "uncovers",
    "undecided", "under", "underdog", "underfoot", "undergo", "undergoes", "undergone", "underline",
    "undermine", "underpass", "underrate", "undertake", "undertook", "undertow", "underway", "underwear",
    "undid", "undo", "undoes", "undoing", "undone", "undress", "undressed", "undue",
    "unduly", "unearth", "unearthed", "uneasily", "uneasy", "unequal", "uneven", "unevenly",
    "unfair", "unfairly", "unfasten", "unfit", "unfold", "unfolded", "unfolding", "unfolds",
    "unfurl", "unfurled", "unhappily", "unhappy", "unharmed", "unhealthy", "unheard", "unhinge",
    "unhinged", "unhook", "unhooked", "unicorn", "unicorns", "unicycle", "unified", "uniform",
    "uniformly", "uniforms", "unify", "union", "unions", "unique", "uniquely", "unison",
    "unit", "unite", "united", "unites", "uniting", "units", "unity", "universal",
    "universe", "unjust", "unjustly", "unkempt", "unkind", "unkindly", "unknown", "unlawful",
    "unleash", "unleashed", "unleashes", "unless", "unlike", "unlikely", "unlimited", "unload",
    "unloaded", "unloading", "unloads", "unlock", "unlocked", "unlocking", "unlocks", "unlucky",
    "unmask", "unmasked", "unmatched", "unmoved", "unnamed", "unnatural", "unnerve", "unnerved",
    "unnoticed", "unpack", "unpacked", "unpacking", "unpacks", "unpaid", "unplug", "unplugged",
    "unpopular", "unravel", "unraveled", "unravels", "unreal", "unrest", "unripe", "unroll",
    "unrolled", "unruly", "unsafe", "unscathed", "unscrew", "unscrewed", "unseen", "unsettle",
    "unsettled", "unshaken", "unsightly", "unskilled", "unsound", "unspoken", "unstable", "unsteady",
    "unsung", "unsure", "untangle", "untangled", "untie", "untied", "unties", "until",
    "untimely", "untold", "untouched", "untrue", "untying", "unused", "unusual", "unusually",
    "unveil", "unveiled", "unveils", "unwanted", "unwary", "unwell", "unwieldy", "unwilling",
    "unwind", "unwinding", "unwinds", "unwise", "unwitting", "unworthy", "unwound", "unwrap",
    "unwrapped", "unwraps", "unwritten", "upbeat", "upcoming", "update", "updated", "updates",
    "updating", "upend", "upended", "upgrade", "upgraded", "upgrades", "upheaval", "upheld",
    "uphill", "uphold", "upholds", "upholster", "upkeep", "uplift", "uplifted", "uplifting",
    "uplifts", "upload", "uploaded", "uploads", "upon", "upper", "uppermost", "upright",
    "uprising", "uproar", "uproot", "uprooted", "uproots", "upset", "upsets", "upsetting",
    "upshot", "upside", "upstairs", "upstart", "upstream", "uptown", "upturn", "upturned",
    "upward", "upwards", "uranium", "urban", "urchin", "urchins", "urge", "urged",
    "urgency", "urgent", "urges", "urging", "usable", "usage", "usages", "use",
    "used", "useful", "useless", "user", "users", "uses", "usher", "ushered",
    "ushers", "using", "usual", "usually", "usurp", "usurped", "utensil", "utensils",
    "utilities", "utility", "utilize", "utmost", "utter", "uttered", "uttering", "utterly",
    "utters", "vacancy", "vacant", "vacate", "vacated", "vacation", "vaccine", "vaccines",
    "vacuum", "vagabond", "vagrant", "vague", "vaguely", "vaguer", "vain", "vainly",
    "valet", "valiant", "valiantly", "valid", "validate", "validity", "valley", "valleys",
    "valor", "valuable", "value", "valued", "values", "valuing", "valve", "valves",
    "van", "vandal", "vandalism", "vandals", "vane", "vanes", "vanilla", "vanish",
    "vanished", "vanishes", "vanishing", "vanity", "vanquish", "vans", "vantage", "vapor",
    "vaporize", "vapors", "variable", "variance", "variant", "varied", "varies", "varieties",
    "variety", "various", "varnish", "varnished", "vary", "varying", "vase", "vases",
    "vast", "vastly", "vastness", "vat", "vats", "vault", "vaulted", "vaulting",
    "vaults", "veal", "veer", "veered", "veering", "veers", "vegetable", "vehicle",
    "vehicles", "veil", "veiled", "veils", "vein", "veined", "veins", "velocity",
    "velvet", "velvety", "vend", "vendor", "vendors", "veneer", "venerable", "venom",
    "venomous", "vent", "vented", "venting", "vents", "venture", "ventured", "ventures",
    "venturing", "venue", "venues", "veranda", "verb", "verbal", "verbally", "verbatim",
    "verbs", "verdict", "verdicts", "verge", "verged", "verges", "verified", "verifies",
    "verify", "vermin", "versatile", "verse", "versed", "verses", "version", "versions",
    "versus", "vertical", "verve", "very", "vessel", "vessels", "vest", "vested",
    "vestige", "vests", "veteran", "veterans", "veto", "vetoed", "vetoes", "vex",
    "vexed", "vexing", "via", "viable", "vial", "vials", "vibrant", "vibrate",
    "vibrated", "vibrates", "vibration", "vice", "vices", "vicinity", "vicious", "viciously",
    "victim", "victims", "victor", "victories", "victors", "victory", "view", "viewed",
    "viewer", "viewing", "viewpoint", "views", "vigil", "vigilant", "vigils", "vigor",
    "vigorous", "vile", "villa", "village", "villager", "villages", "villain", "villains",
    "villas", "vindicate", "vine", "vinegar", "vines", "vineyard", "vintage", "vinyl",
    "viola", "violas", "violate", "violated", "violates", "violation", "violence", "violent",
    "violently", "violet", "violets", "violin", "violinist", "violins", "viper", "vipers",
    "virtual", "virtually", "virtue", "virtues", "virtuous", "virus", "viruses", "visa",
    "visas", "vise", "visible", "visibly", "vision", "visionary", "visions", "visit",
    "visited", "visiting", "visitor", "visits", "visor", "visors", "vista", "vistas",
    "visual", "visualize", "visually", "vital", "vitality", "vitally", "vitamin", "vitamins",
    "vivid", "vividly", "vocal", "vocalist", "vocals", "vocation", "vogue", "voice",
    "voiced", "voices", "voicing", "void", "voided", "voids", "volatile", "volcanic",
    "volcano", "volley", "volleys", "volt", "voltage", "volts", "volume", "volumes",
    "voluntary", "volunteer", "vomit", "vortex", "vote", "voted", "voter", "voters",
    "votes", "voting", "vouch", "vouched", "voucher", "vouches", "vow", "vowed",
    "vowel", "vowels", "vowing", "vows", "voyage", "voyaged", "voyager", "voyages",
    "vulgar", "vulture", "vultures", "wad", "wadded", "waddle", "waddled", "waddles",
    "waddling", "wade", "waded", "wades", "wading", "wads", "wafer", "wafers",
    "waffle", "waffles", "waft", "wafted", "wafting", "wafts", "wag", "wage",
    "waged", "wager", "wagers", "wages", "wagged", "wagging", "waging", "wagon",
    "wagons", "wags", "wail", "wailed", "wailing", "wails", "waist", "waistband",
    "waists", "wait", "waited", "waiter", "waiting", "waitress", "waits", "waive",
    "waived", "waiver", "wake", "waken", "wakes", "waking", "walk", "walked",
    "walker", "walking", "walks", "walkway", "wall", "walled", "wallet", "wallets",
    "wallow", "wallowed", "wallows", "wallpaper", "walls", "walnut", "walnuts", "walrus",
    "waltz", "waltzed", "waltzes", "wand", "wander", "wandered", "wanderer", "wandering",
    "wanders", "wands", "wane", "waned", "wanes", "waning", "want", "wanted",
    "wanting", "wants", "war", "warble", "warbled", "warbler", "ward", "warded",
    "warden", "wardrobe", "wards", "ware", "warehouse", "wares", "warfare", "warily",
    "warlike", "warm", "warmed", "warmer", "warmest", "warming", "warmly", "warms",
    "warmth", "warn", "warned", "warning", "warns", "warp", "warped", "warping",
    "warps", "warrant", "warranted", "warrants", "warranty", "warring", "warrior", "warriors",
    "wars", "wart", "wartime", "warts", "wary", "was", "wash", "washed",
    "washer", "washes", "washing", "wasp", "wasps", "waste", "wasted", "wasteful",
    "wastes", "wasting", "watch", "watchdog", "watched", "watches", "watchful", "watching",
    "watchman", "water", "watered", "waterfall", "watering", "waters", "waterway", "watery",
    "watt", "watts", "wave", "waved", "waver", "wavered", "wavering", "wavers",
    "waves", "waving", "wavy", "wax", "waxed", "waxes", "waxing", "waxy",
    "way", "ways", "wayside", "wayward", "weak", "weaken", "weakened", "weakens",
    "weaker", "weakest", "weakly", "weakness", "wealth", "wealthy", "wean", "weaned",
    "weapon", "weapons", "wear", "wearer", "wearily", "weariness", "wearing", "wears",
    "weary", "weasel", "weasels", "weather", "weathered", "weave", "weaver", "weaves",
    "weaving", "web", "webbed", "webs", "website", "wed", "wedding", "wedge",
    "wedged", "wedges", "wedging", "weds", "wee", "weed", "weeded", "weeding",
    "weeds", "week", "weekday", "weekend", "weekly", "weeks", "weep", "weeping",
    "weeps", "weigh", "weighed", "weighing", "weighs", "weight", "weighted", "weights",
    "weighty", "weird", "weirdly", "welcome", "welcomed", "welcomes", "welcoming", "weld",
    "welded", "welder", "welding", "welds", "welfare", "well", "wells", "welt",
    "welts", "went", "wept", "were", "west", "western", "westward", "wet",
    "wetland", "wets", "wetting", "whack", "whacked", "whacking", "whacks", "whale",
    "whales", "whaling", "wharf", "what", "whatever", "wheat", "wheel", "wheeled",
    "wheeling", "wheels", "wheeze", "wheezed", "wheezes", "wheezing", "when", "whenever",
    "where", "whereas", "whereby", "wherever", "whether", "which", "whichever", "whiff",
    "whiffs", "while", "whim", "whimper", "whimpered", "whimpers", "whims", "whimsical",
    "whine", "whined", "whines", "whining", "whinnied", "whinny", "whip", "whipped",
    "whipping", "whips", "whir", "whirl", "whirled", "whirling", "whirlpool", "whirls",
    "whirlwind", "whirred", "whisk", "whisked", "whisker", "whiskers", "whisking", "whisks",
    "whisper", "whispered", "whispers", "whistle", "whistled", "whistles", "whistling", "white",
    "whiten", "whitened", "whiter", "whites", "whitest", "whitewash", "whittle", "whittled",
    "whittles", "whittling", "whiz", "whizzed", "who", "whoever", "whole", "wholesale",
    "wholesome", "wholly", "whom", "whoop", "whooped", "whose", "why", "wick",
    "wicked", "wickedly", "wicker", "wicks", "wide", "widely", "widen", "widened",
    "widens", "wider", "widest", "widow", "widower", "widows", "width", "widths",
    "wield", "wielded", "wielding", "wields", "wife", "wiggle", "wiggled", "wiggles",
    "wiggling", "wiggly", "wigwam", "wild", "wilder", "wildest", "wildfire", "wildlife",
    "wildly", "wilds", "will", "willed", "willing", "willingly", "willow", "willows",
    "willpower", "wills", "wilt", "wilted", "wilting", "wilts", "wily", "win",
    "wince", "winced", "winces", "winch", "winches", "wincing", "wind", "windfall",
    "winding", "windmill", "window", "windows", "windpipe", "winds", "windy", "wine",
    "winery", "wines", "wing", "winged", "wings", "wingspan", "wink", "winked",
    "winking", "winks", "winner", "winners", "winning", "wins", "winter", "winters",
    "wintry", "wipe", "wiped", "wiper", "wipes", "wiping", "wire", "wired",
    "wires", "wiring", "wisdom", "wise", "wisely", "wiser", "wisest", "wish",
    "wished", "wishes", "wishful", "wishing", "wisp", "wisps", "wispy", "wistful",
    "wistfully", "wit", "witch", "witches", "with", "withdraw", "withdrawn", "withdraws",
    "withdrew", "wither", "withered", "withering", "withers", "withheld", "withhold", "withholds",
    "within", "without", "withstand", "withstood", "witness", "witnessed", "witnesses", "wits",
    "witty", "wives", "wizard", "wizardry", "wizards", "wobble", "wobbled", "wobbles",
    "wobbling", "wobbly", "woe", "woeful", "woes", "woke", "woken", "wolf",
    "wolves", "woman", "womanly", "women", "won", "wonder", "wondered", "wonderful",
    "wondering", "wonders", "wondrous", "wood", "wooded", "wooden", "woodland", "woods",
    "woodwork", "wool", "woolen", "wooly", "word", "worded", "wording", "words",
    "wordy", "wore", "work", "workbench", "worked", "worker", "workers", "working",
    "workout", "works", "workshop", "world", "worldly", "worlds", "worldwide", "worm",
    "wormed", "worms", "worn", "worried", "worries", "worry", "worrying", "worse",
    "worsen", "worsened", "worship", "worshiped", "worships", "worst", "worth", "worthless",
    "worthy", "would", "wound", "wounded", "wounding", "wounds", "wove", "woven",
    "wrangle", "wrangled", "wrangler", "wrap", "wrapped", "wrapper", "wrapping", "wraps",
    "wrath", "wreath", "wreaths", "wreck", "wreckage", "wrecked", "wrecking", "wrecks",
    "wren", "wrench", "wrenched", "wrenches", "wrens", "wrestle", "wrestled", "wrestler",
    "wrestles", "wrestling", "wretched", "wriggle", "wriggled", "wriggles", "wriggling", "wring",
    "wringing", "wrings", "wrinkle", "wrinkled", "wrinkles", "wrist", "wrists", "write",
    "writer", "writers", "writes", "writhe", "writhed", "writhes", "writhing", "writing",
    "written", "wrong", "wronged", "wrongful", "wrongly", "wrongs", "wrote", "wrought",
    "wrung", "wry", "wryly", "xylophone", "yacht", "yachts", "yak", "yaks",
    "yam", "yams", "yank", "yanked", "yanking", "yanks", "yap", "yapped",
    "yapping", "yaps", "yard", "yards", "yardstick", "yarn", "yarns", "yawn",
    "yawned", "yawning", "yawns", "yeah", "year", "yearly", "yearn", "yearned",
    "yearning", "yearns", "years", "yeast", "yell", "yelled", "yelling", "yellow",
    "yellowed", "yellowish", "yellows", "yells", "yelp", "yelped", "yelping", "yelps",
    "yes", "yesterday", "yet", "yew", "yield", "yielded", "yielding", "yields",
    "yodel", "yodeled", "yoga", "yogurt", "yoke", "yoked", "yokes", "yolk",
    "yolks", "yonder", "yore", "you", "young", "younger", "youngest", "youngster",
    "your", "yours", "yourself", "youth", "youthful", "youths", "yowl", "yowled",
    "zany", "zeal", "zealous", "zebra", "zebras", "zenith", "zephyr", "zero",
    "zeros", "zest", "zesty", "zigzag", "zigzagged", "zigzags", "zinc", "zing",
    "zinnia", "zip", "zipped", "zipper", "zippers", "zipping", "zips", "zither",
    "zodiac", "zombie", "zombies", "zone", "zoned", "zones", "zoning", "zoo",
    "zoom", "zoomed", "zooming", "zooms", "zoos", "zucchini",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_size_list() {
        assert_eq!(WORDS.len(), 16_838);
    }

    #[test]
    fn test_words_unique() {
        let set: HashSet<&str> = WORDS.iter().copied().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn test_words_lowercase_ascii() {
        for word in WORDS {
            assert!((3..=9).contains(&word.len()), "{word}");
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }
    }
}
